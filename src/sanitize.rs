//! Sanitization of composed names against per-class resource constraints.
//!
//! Each target class carries an allow-list, a length cap, and lowercase
//! folding. Rules are a data table so a new class is a data change.

/// Target constraint class for a sanitized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeClass {
	/// Most Azure resources: 63 chars, letters/digits/hyphens.
	General,
	/// Storage-account style: 24 chars, letters/digits only.
	Storage,
}

/// Per-class sanitization rule.
#[derive(Debug, Clone, Copy)]
struct Rule {
	max_len: usize,
	allow_hyphen: bool,
}

const GENERAL_RULE: Rule = Rule {
	max_len: 63,
	allow_hyphen: true,
};

const STORAGE_RULE: Rule = Rule {
	max_len: 24,
	allow_hyphen: false,
};

impl SanitizeClass {
	fn rule(&self) -> Rule {
		match self {
			SanitizeClass::General => GENERAL_RULE,
			SanitizeClass::Storage => STORAGE_RULE,
		}
	}

	/// Maximum length a sanitized name of this class may have.
	pub fn max_len(&self) -> usize {
		self.rule().max_len
	}
}

/// Sanitize a composed name for a target class.
///
/// Strips every character outside the class allow-list, folds to
/// lowercase, then truncates to the class length cap. Truncation is a
/// plain left-anchored cut; see `unique` for the opt-in disambiguator.
/// Always returns a string, possibly empty if everything was stripped.
pub fn sanitize(name: &str, class: SanitizeClass) -> String {
	let rule = class.rule();
	let mut result = String::with_capacity(name.len());

	for c in name.chars() {
		if c.is_ascii_alphanumeric() {
			result.push(c.to_ascii_lowercase());
		} else if c == '-' && rule.allow_hyphen {
			result.push(c);
		}
		// Everything else is stripped
	}

	// Output is pure ASCII, so byte truncation is char truncation
	result.truncate(rule.max_len);
	result
}

/// Whether sanitizing to `class` would truncate this name.
pub fn would_truncate(name: &str, class: SanitizeClass) -> bool {
	let rule = class.rule();
	let kept = name
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || (*c == '-' && rule.allow_hyphen))
		.count();
	kept > rule.max_len
}
