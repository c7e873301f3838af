//! Azure Resource Naming Library
//!
//! Derives deterministic, constraint-compliant resource names from a
//! small set of naming components and a resource-type vocabulary.

pub mod compose;
pub mod config_file;
pub mod error;
pub mod report;
pub mod sanitize;
pub mod short_names;
pub mod unique;
pub mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use compose::compose_name;
use sanitize::{sanitize, would_truncate, SanitizeClass};
use unique::UniqueNames;

pub use error::{Error, Result};

/// Naming components composed into every derived name.
///
/// Each component is optional; absent components shorten the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingComponents {
	/// Organization or workload prefix (e.g. "neko")
	pub prefix: Option<String>,
	/// Instance suffix (e.g. "01")
	pub suffix: Option<String>,
	/// Environment token (e.g. "prod")
	pub environment: Option<String>,
	/// Region token (e.g. "weu")
	pub region: Option<String>,
}

/// Full input for one catalog build.
#[derive(Debug, Clone, Default)]
pub struct NamingSpec {
	/// Naming components composed into every name
	pub components: NamingComponents,
	/// Resource-type overrides merged over the built-in table
	pub custom_types: BTreeMap<String, String>,
	/// Suffixes used to bulk-produce name variants
	pub name_suffixes: Vec<String>,
	/// Disambiguate truncated or colliding names with a hash fragment
	pub hash_suffix: bool,
}

/// Derived names for one resource-type key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameEntry {
	/// Short-name token from the merged type table
	pub short_name: String,
	/// Composed name before sanitization
	pub composed: String,
	/// General-class sanitized name (63 chars, hyphens kept)
	pub general: String,
	/// Storage-class sanitized name (24 chars, hyphens stripped)
	pub storage: String,
	/// Suffix variants built from the general name
	pub variants: BTreeMap<String, String>,
}

/// All derived names, keyed by resource type, sorted for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameCatalog {
	/// Entries keyed by resource-type key
	pub entries: BTreeMap<String, NameEntry>,
}

/// Bulk-produce `"{name}-{suffix}"` variants for every name.
///
/// The result has exactly the keys of `names`; each inner map has one
/// entry per suffix. An empty suffix list yields empty inner maps.
pub fn build_variants(
	names: &BTreeMap<String, String>,
	suffixes: &[String],
) -> BTreeMap<String, BTreeMap<String, String>> {
	names
		.iter()
		.map(|(key, name)| {
			let inner = suffixes
				.iter()
				.map(|suffix| (suffix.clone(), format!("{}-{}", name, suffix)))
				.collect();
			(key.clone(), inner)
		})
		.collect()
}

/// Name derivation engine: validated spec plus the merged type table.
pub struct Namer {
	spec: NamingSpec,
	types: BTreeMap<String, String>,
}

impl Namer {
	/// Validate a spec and build the merged resource-type table.
	///
	/// Fails fast if any provided component or name suffix violates the
	/// allowed character pattern, before any name is composed.
	pub fn new(spec: NamingSpec) -> Result<Self> {
		validate::validate_components(&spec.components)?;
		for suffix in &spec.name_suffixes {
			validate::validate_component("name_suffix", suffix)?;
		}

		let types =
			short_names::merge_short_names(&short_names::default_short_names(), &spec.custom_types);
		debug!(types = types.len(), "merged resource-type table");

		Ok(Self { spec, types })
	}

	/// The merged resource-type table used for this build.
	pub fn types(&self) -> &BTreeMap<String, String> {
		&self.types
	}

	/// Derive the full name catalog.
	///
	/// Pure given the spec: same inputs, same catalog, byte for byte.
	pub fn generate(&self) -> NameCatalog {
		let mut composed_names: BTreeMap<String, String> = BTreeMap::new();
		let mut general_names: BTreeMap<String, String> = BTreeMap::new();
		let mut storage_names: BTreeMap<String, String> = BTreeMap::new();

		let mut general_unique = UniqueNames::new();
		let mut storage_unique = UniqueNames::new();

		for (key, short_name) in &self.types {
			let composed = compose_name(&self.spec.components, short_name);
			let mut general = sanitize(&composed, SanitizeClass::General);
			let mut storage = sanitize(&composed, SanitizeClass::Storage);

			if self.spec.hash_suffix {
				general = general_unique.fit(
					&general,
					&composed,
					SanitizeClass::General,
					would_truncate(&composed, SanitizeClass::General),
				);
				storage = storage_unique.fit(
					&storage,
					&composed,
					SanitizeClass::Storage,
					would_truncate(&composed, SanitizeClass::Storage),
				);
			}

			composed_names.insert(key.clone(), composed);
			general_names.insert(key.clone(), general);
			storage_names.insert(key.clone(), storage);
		}

		let mut variants = build_variants(&general_names, &self.spec.name_suffixes);

		let entries = self
			.types
			.iter()
			.map(|(key, short_name)| {
				let entry = NameEntry {
					short_name: short_name.clone(),
					composed: composed_names.remove(key).unwrap_or_default(),
					general: general_names.remove(key).unwrap_or_default(),
					storage: storage_names.remove(key).unwrap_or_default(),
					variants: variants.remove(key).unwrap_or_default(),
				};
				(key.clone(), entry)
			})
			.collect();

		debug!(entries = self.types.len(), "derived name catalog");
		NameCatalog { entries }
	}

	/// Derive the entry for a single resource-type key.
	///
	/// A key absent from the merged table is an explicit error, never a
	/// default or empty name.
	pub fn name_for(&self, key: &str) -> Result<NameEntry> {
		let mut catalog = self.generate();
		catalog
			.entries
			.remove(key)
			.ok_or_else(|| Error::UnknownResourceType(key.to_string()))
	}
}
