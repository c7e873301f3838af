//! Error types for name derivation.
//!
//! All failures are per-call and recoverable by the caller supplying
//! corrected input; there are no transient failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for name derivation.
#[derive(Error, Debug)]
pub enum Error {
	/// A naming component failed its character-class check.
	#[error("invalid {field} '{value}': must match {pattern}")]
	InvalidComponent {
		/// Which input field was rejected
		field: &'static str,
		/// The offending value
		value: String,
		/// The pattern the value must match
		pattern: &'static str,
	},

	/// A resource-type key is absent from the merged type table.
	#[error("unknown resource type '{0}'")]
	UnknownResourceType(String),

	/// A config file could not be read or parsed.
	#[error("invalid config {path}: {message}")]
	Config {
		/// Path to the config file
		path: PathBuf,
		/// What went wrong
		message: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_component_names_field_and_value() {
		let err = Error::InvalidComponent {
			field: "prefix",
			value: "bad value".to_string(),
			pattern: "^[a-zA-Z0-9-]+$",
		};
		let msg = err.to_string();
		assert!(msg.contains("prefix"));
		assert!(msg.contains("bad value"));
	}

	#[test]
	fn test_unknown_resource_type_message() {
		let err = Error::UnknownResourceType("fortinet_firewall".to_string());
		assert_eq!(
			err.to_string(),
			"unknown resource type 'fortinet_firewall'"
		);
	}
}
