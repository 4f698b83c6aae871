use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::utils::validation::is_numeric_artifact;

/// Separator between readings in a calendar field
pub const BULLET: char = '•';

/// Separator between sub-groups of a composite reading
pub const GROUP_SEPARATOR: char = ';';

static COMPOSITE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Composite\s+\d+\s*[-–—]\s*").unwrap());

/// Split one readings field into raw citation strings, in reading order.
///
/// A segment starting with `Composite N -` opens a composite reading: the
/// marker is stripped and that segment, together with every following segment
/// up to the next marker, is further split on `;`. Purely numeric and empty
/// pieces are dropped; duplicates are kept.
///
/// # Examples
///
/// ```
/// use orthofetch::parsing::splitter::split_readings;
///
/// let citations = split_readings("Composite 1 - Genesis 3:1-8 • Psalms 1:1-2; John 1:1");
/// assert_eq!(citations, vec!["Genesis 3:1-8", "Psalms 1:1-2", "John 1:1"]);
/// ```
#[must_use]
pub fn split_readings(field: &str) -> Vec<String> {
    let mut citations = Vec::new();
    let mut in_composite = false;

    for segment in field.split(BULLET).map(str::trim).filter(|s| !s.is_empty()) {
        let segment = match COMPOSITE_MARKER.find(segment) {
            Some(marker) => {
                in_composite = true;
                debug!(marker = marker.as_str().trim(), "Unwrapping composite reading");
                &segment[marker.end()..]
            }
            None => segment,
        };

        if in_composite {
            citations.extend(
                segment
                    .split(GROUP_SEPARATOR)
                    .flat_map(|group| group.split(BULLET))
                    .map(str::trim)
                    .map(str::to_string),
            );
        } else {
            citations.push(segment.to_string());
        }
    }

    citations.retain(|c| !c.is_empty() && !is_numeric_artifact(c));

    citations
}
