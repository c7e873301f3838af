//! Collision-aware name fitting for the opt-in hash-suffix mode.
//!
//! Appends the minimum number of hex characters from the MD5 of the
//! pre-truncation name needed to be unique, re-fitting within the
//! class length cap.

use std::collections::HashSet;

use crate::sanitize::SanitizeClass;

/// Hash a string using MD5 and return full 32 hex chars.
pub fn hash_hex(s: &str) -> String {
	use md5::{Digest, Md5};
	let mut hasher = Md5::new();
	hasher.update(s.as_bytes());
	let result = hasher.finalize();
	format!("{:x}", result)
}

/// Tracker that fits sanitized names uniquely within one catalog build.
#[derive(Debug, Default)]
pub struct UniqueNames {
	used: HashSet<String>,
}

impl UniqueNames {
	/// Create a new tracker.
	pub fn new() -> Self {
		Self {
			used: HashSet::new(),
		}
	}

	/// Fit a sanitized name, disambiguating on truncation or collision.
	///
	/// `source` is the full pre-truncation name the hash is taken from.
	/// Untruncated, unseen names pass through unchanged.
	pub fn fit(
		&mut self,
		sanitized: &str,
		source: &str,
		class: SanitizeClass,
		truncated: bool,
	) -> String {
		if !truncated && !self.used.contains(sanitized) {
			self.used.insert(sanitized.to_string());
			return sanitized.to_string();
		}

		let hash = hash_hex(source);
		let sep = match class {
			SanitizeClass::General => "-",
			SanitizeClass::Storage => "",
		};

		// Start with 4 chars, extend on collision
		for len in 4..=hash.len() {
			let budget = class.max_len().saturating_sub(len + sep.len());
			let base = sanitized
				.get(..budget.min(sanitized.len()))
				.unwrap_or("")
				.trim_end_matches('-');
			let name = format!("{}{}{}", base, sep, &hash[..len]);
			if !self.used.contains(&name) {
				self.used.insert(name.clone());
				return name;
			}
		}

		// Fallback: use full hash (shouldn't happen)
		let name = hash[..class.max_len().min(hash.len())].to_string();
		self.used.insert(name.clone());
		name
	}
}
