mod remover;
mod usage;

pub use remover::remove_unused_rules;
pub use usage::UsageChecker;

use regex::Regex;
use std::collections::HashSet;

/// Collect the distinct class-selector tokens appearing in stylesheet text.
///
/// A plain regex scan, tolerant of malformed CSS. Used only for before/after
/// statistics, so over-matching (e.g. tokens inside comments) is acceptable.
pub fn extract_classes(css: &str) -> HashSet<String> {
    let class_token = Regex::new(r"\.([a-zA-Z_][\w-]*)").expect("valid pattern");

    class_token
        .captures_iter(css)
        .map(|cap| cap[1].to_string())
        .collect()
}
