//! Resource-type vocabulary: short-name tokens per symbolic type key.
//!
//! The built-in table covers the hub-and-spoke resource set; callers
//! extend or override it per invocation, the table itself is immutable.

use std::collections::BTreeMap;

/// Built-in resource-type short names.
pub const DEFAULT_SHORT_NAMES: &[(&str, &str)] = &[
	("custom_vm", "vm"),
	("key_vault", "kv"),
	("log_analytics_workspace", "log"),
	("network_interface", "nic"),
	("network_security_group", "nsg"),
	("palo_alto_vm_series", "palofw"),
	("private_endpoint", "pe"),
	("public_ip", "pip"),
	("resource_group", "rg"),
	("route_table", "rt"),
	("route_table_route", "route"),
	("storage_account", "st"),
	("subnet", "snet"),
	("virtual_network", "vnet"),
	("virtual_network_peering", "peer"),
];

/// The built-in table as an owned map.
pub fn default_short_names() -> BTreeMap<String, String> {
	DEFAULT_SHORT_NAMES
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

/// Merge caller overrides into a defaults table.
///
/// Caller entries win on key collision; unrelated keys from both sides
/// are preserved.
pub fn merge_short_names(
	defaults: &BTreeMap<String, String>,
	overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
	let mut merged = defaults.clone();
	for (key, token) in overrides {
		merged.insert(key.clone(), token.clone());
	}
	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
		entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_defaults_contain_known_tokens() {
		let defaults = default_short_names();
		assert_eq!(defaults["palo_alto_vm_series"], "palofw");
		assert_eq!(defaults["route_table_route"], "route");
		assert_eq!(defaults["custom_vm"], "vm");
	}

	#[test]
	fn test_override_wins_on_collision() {
		let merged = merge_short_names(&default_short_names(), &map(&[("custom_vm", "xvm")]));
		assert_eq!(merged["custom_vm"], "xvm");
		// Untouched keys retain defaults
		assert_eq!(merged["palo_alto_vm_series"], "palofw");
	}

	#[test]
	fn test_new_keys_from_both_sides_preserved() {
		let merged = merge_short_names(
			&default_short_names(),
			&map(&[("fortinet_firewall", "fgfw")]),
		);
		assert_eq!(merged["fortinet_firewall"], "fgfw");
		assert_eq!(merged.len(), DEFAULT_SHORT_NAMES.len() + 1);
	}
}
