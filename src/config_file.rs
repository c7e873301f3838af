//! Naming configuration discovery and parsing.
//!
//! Finds `azname.config.json` by searching upward from a starting
//! directory and parses it into the same fields the CLI flags carry.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "azname.config.json";

/// Contents of a naming config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
	/// Organization or workload prefix
	pub prefix: Option<String>,
	/// Instance suffix (e.g. "01")
	pub suffix: Option<String>,
	/// Environment token (e.g. "prod")
	pub environment: Option<String>,
	/// Region token (e.g. "weu")
	pub region: Option<String>,
	/// Resource-type overrides merged over the built-in table
	#[serde(default)]
	pub custom_types: BTreeMap<String, String>,
	/// Suffixes used to bulk-produce name variants
	#[serde(default)]
	pub name_suffixes: Vec<String>,
}

/// Find a naming config by searching upward from `start_dir`.
///
/// Returns the path of the first `azname.config.json` found in the
/// directory or any parent, or `None` if there is none.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
	for dir in start_dir.ancestors() {
		let candidate = dir.join(CONFIG_FILE_NAME);
		if candidate.exists() {
			return Some(candidate);
		}
	}

	None
}

/// Load and parse a naming config file.
///
/// Unreadable or malformed files are a fail-fast error naming the file;
/// unknown fields are ignored.
pub fn load_config(path: &Path) -> Result<FileConfig> {
	let content = fs::read_to_string(path).map_err(|e| Error::Config {
		path: path.to_path_buf(),
		message: format!("failed to read: {}", e),
	})?;

	serde_json::from_str(&content).map_err(|e| Error::Config {
		path: path.to_path_buf(),
		message: format!("failed to parse: {}", e),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn test_find_config_walks_ancestors() {
		let temp = tempdir().unwrap();

		// No config → None
		assert!(find_config(temp.path()).is_none());

		fs::write(
			temp.path().join(CONFIG_FILE_NAME),
			r#"{ "prefix": "neko" }"#,
		)
		.unwrap();

		let nested = temp.path().join("modules").join("network");
		fs::create_dir_all(&nested).unwrap();

		let found = find_config(&nested).unwrap();
		assert_eq!(found, temp.path().join(CONFIG_FILE_NAME));
	}

	#[test]
	fn test_nearest_config_wins() {
		let temp = tempdir().unwrap();
		let nested = temp.path().join("spoke");
		fs::create_dir_all(&nested).unwrap();

		fs::write(temp.path().join(CONFIG_FILE_NAME), "{}").unwrap();
		fs::write(nested.join(CONFIG_FILE_NAME), "{}").unwrap();

		let found = find_config(&nested).unwrap();
		assert_eq!(found, nested.join(CONFIG_FILE_NAME));
	}

	#[test]
	fn test_load_config() {
		let temp = tempdir().unwrap();
		let path = temp.path().join(CONFIG_FILE_NAME);

		fs::write(
			&path,
			r#"{
				"prefix": "neko",
				"environment": "prod",
				"region": "weu",
				"suffix": "01",
				"customTypes": { "fortinet_firewall": "fgfw" },
				"nameSuffixes": ["hub", "spoke-app"]
			}"#,
		)
		.unwrap();

		let config = load_config(&path).unwrap();
		assert_eq!(config.prefix.as_deref(), Some("neko"));
		assert_eq!(config.custom_types["fortinet_firewall"], "fgfw");
		assert_eq!(config.name_suffixes, vec!["hub", "spoke-app"]);
	}

	#[test]
	fn test_load_malformed_config_fails_with_path() {
		let temp = tempdir().unwrap();
		let path = temp.path().join(CONFIG_FILE_NAME);
		fs::write(&path, "{ not json").unwrap();

		let err = load_config(&path).unwrap_err();
		assert!(err.to_string().contains(CONFIG_FILE_NAME));
	}

	#[test]
	fn test_unknown_fields_ignored() {
		let temp = tempdir().unwrap();
		let path = temp.path().join(CONFIG_FILE_NAME);
		fs::write(&path, r#"{ "prefix": "neko", "somethingElse": true }"#).unwrap();

		let config = load_config(&path).unwrap();
		assert_eq!(config.prefix.as_deref(), Some("neko"));
	}
}
