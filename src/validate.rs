//! Upfront validation of naming components.
//!
//! Runs before any name is composed; a single violation rejects the
//! whole invocation with the offending field and value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::NamingComponents;

/// Pattern every provided naming component must match.
pub const COMPONENT_PATTERN: &str = "^[a-zA-Z0-9-]+$";

static COMPONENT_REGEX: Lazy<Regex> =
	Lazy::new(|| Regex::new(COMPONENT_PATTERN).expect("Invalid component regex"));

/// Check one provided component value against the allowed pattern.
pub fn validate_component(field: &'static str, value: &str) -> Result<()> {
	if COMPONENT_REGEX.is_match(value) {
		Ok(())
	} else {
		Err(Error::InvalidComponent {
			field,
			value: value.to_string(),
			pattern: COMPONENT_PATTERN,
		})
	}
}

/// Validate every provided naming component, fail-fast on the first miss.
pub fn validate_components(components: &NamingComponents) -> Result<()> {
	let fields = [
		("prefix", components.prefix.as_deref()),
		("suffix", components.suffix.as_deref()),
		("environment", components.environment.as_deref()),
		("region", components.region.as_deref()),
	];

	for (field, value) in fields {
		if let Some(value) = value {
			validate_component(field, value)?;
		}
	}

	Ok(())
}
