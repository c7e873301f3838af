//! Report rendering for derived name catalogs.
//!
//! Produces the JSON and text representations consumed by the CLI;
//! generation is pure, writing is a thin wrapper.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::NameCatalog;

/// Render a catalog as pretty JSON with a stable field order.
pub fn render_json(catalog: &NameCatalog) -> serde_json::Result<String> {
	serde_json::to_string_pretty(catalog)
}

/// Render a catalog as human-readable text (no I/O).
pub fn render_text(catalog: &NameCatalog) -> String {
	let mut lines = Vec::new();

	for (key, entry) in &catalog.entries {
		lines.push(format!("{} ({})", key, entry.short_name));
		lines.push(format!("  general: {}", entry.general));
		lines.push(format!("  storage: {}", entry.storage));
		for (suffix, name) in &entry.variants {
			lines.push(format!("  {}: {}", suffix, name));
		}
		lines.push(String::new());
	}

	lines.join("\n")
}

/// Write a rendered report to a file.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
	fs::write(path, content)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Namer, NamingComponents, NamingSpec};

	fn catalog() -> NameCatalog {
		let spec = NamingSpec {
			components: NamingComponents {
				prefix: Some("neko".to_string()),
				suffix: Some("01".to_string()),
				environment: Some("prod".to_string()),
				region: Some("weu".to_string()),
			},
			name_suffixes: vec!["hub".to_string()],
			..Default::default()
		};
		Namer::new(spec).unwrap().generate()
	}

	#[test]
	fn test_render_text_lists_entries_and_variants() {
		let text = render_text(&catalog());
		assert!(text.contains("resource_group (rg)"));
		assert!(text.contains("  general: neko-rg-prod-weu-01"));
		assert!(text.contains("  storage: nekorgprodweu01"));
		assert!(text.contains("  hub: neko-rg-prod-weu-01-hub"));
	}

	#[test]
	fn test_render_json_shape() {
		let json = render_json(&catalog()).unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();

		let entry = &value["entries"]["key_vault"];
		assert_eq!(entry["short_name"], "kv");
		assert_eq!(entry["general"], "neko-kv-prod-weu-01");
		assert_eq!(entry["variants"]["hub"], "neko-kv-prod-weu-01-hub");
	}

	#[test]
	fn test_write_report() {
		let temp = tempfile::tempdir().unwrap();
		let path = temp.path().join("names.json");
		write_report(&path, "{}").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
	}
}
