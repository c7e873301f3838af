//! Name composition from ordered segments.
//!
//! Joins naming components around a resource-type short name in the
//! fixed order `prefix-short-environment-region-suffix`, omitting any
//! empty segment and its separating hyphen.

use crate::NamingComponents;

/// Compose a full resource name for one resource-type short name.
///
/// Absent components simply produce a shorter name; with every
/// component absent the result is exactly `short_name`. No length or
/// character enforcement happens here, that is the sanitizer's job.
pub fn compose_name(components: &NamingComponents, short_name: &str) -> String {
	let segments = [
		components.prefix.as_deref(),
		Some(short_name),
		components.environment.as_deref(),
		components.region.as_deref(),
		components.suffix.as_deref(),
	];

	segments
		.iter()
		.filter_map(|s| *s)
		.filter(|s| !s.is_empty())
		.collect::<Vec<_>>()
		.join("-")
}
