use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Answers "is this class referenced anywhere in the source tree?" by testing
/// a fixed battery of textual patterns against every candidate file.
///
/// File contents are read once through an internal cache; the checker is
/// built fresh for each stylesheet-processing pass and discarded with it.
pub struct UsageChecker {
    source_files: Vec<PathBuf>,
    cache: HashMap<PathBuf, Option<String>>,
}

impl UsageChecker {
    pub fn new(source_files: Vec<PathBuf>) -> Self {
        Self {
            source_files,
            cache: HashMap::new(),
        }
    }

    /// Existence test, short-circuiting on the first file and pattern that
    /// match. Files that cannot be read are skipped: an unreadable file
    /// cannot prove usage, and it must not block other classes' checks.
    pub fn is_used(&mut self, class: &str) -> bool {
        let patterns = usage_patterns(class);

        for i in 0..self.source_files.len() {
            let path = self.source_files[i].clone();
            let content = match self.cached_content(&path) {
                Some(content) => content,
                None => continue,
            };

            if patterns.iter().any(|pattern| pattern.is_match(content)) {
                return true;
            }
        }

        false
    }

    fn cached_content(&mut self, path: &Path) -> Option<&String> {
        self.cache
            .entry(path.to_path_buf())
            .or_insert_with(|| std::fs::read_to_string(path).ok())
            .as_ref()
    }
}

/// The six pattern families that count as a usage of `class` in source text:
/// a standalone quoted literal, a token inside a `className` attribute (string
/// or braced-expression form), a `styles.<name>` member access, a bracket
/// lookup, and a `classList` API call.
fn usage_patterns(class: &str) -> Vec<Regex> {
    let c = regex::escape(class);

    let sources = [
        format!(r#"["'`]{c}["'`]"#),
        format!(r#"className\s*=\s*["'](?:[^"']*\s)?{c}(?:\s[^"']*)?["']"#),
        format!(r#"className\s*=\s*\{{[^}}]*["'`](?:[^"'`]*\s)?{c}(?:\s[^"'`]*)?["'`]"#),
        format!(r"styles\.{c}\b"),
        format!(r#"\[\s*["']{c}["']\s*\]"#),
        format!(r#"classList\.(?:add|remove|toggle|contains)\s*\(\s*["'`]{c}["'`]"#),
    ];

    sources
        .iter()
        .map(|source| Regex::new(source).expect("usage pattern is valid for any escaped class"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn checker_with(files: &[(&str, &str)]) -> (tempfile::TempDir, UsageChecker) {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();

        for (name, content) in files {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            paths.push(path);
        }

        (dir, UsageChecker::new(paths))
    }

    #[test]
    fn quoted_string_literal_counts_as_usage() {
        let (_dir, mut checker) =
            checker_with(&[("a.js", "element.className = \"header\";\n")]);

        assert!(checker.is_used("header"));
        assert!(!checker.is_used("footer"));
    }

    #[test]
    fn class_name_attribute_token_counts_as_usage() {
        let (_dir, mut checker) =
            checker_with(&[("a.jsx", "return <div className=\"card shadow-lg\" />;\n")]);

        assert!(checker.is_used("card"));
        assert!(checker.is_used("shadow-lg"));
        // Substring of a longer token is not a usage.
        assert!(!checker.is_used("shadow"));
    }

    #[test]
    fn braced_class_name_expression_counts_as_usage() {
        let (_dir, mut checker) = checker_with(&[(
            "a.jsx",
            "return <div className={active ? 'tab on' : 'tab'} />;\n",
        )]);

        assert!(checker.is_used("tab"));
        assert!(checker.is_used("on"));
    }

    #[test]
    fn styles_member_access_counts_as_usage() {
        let (_dir, mut checker) = checker_with(&[("a.ts", "const cls = styles.wrapper;\n")]);

        assert!(checker.is_used("wrapper"));
        assert!(!checker.is_used("wrap"));
    }

    #[test]
    fn bracket_lookup_counts_as_usage() {
        let (_dir, mut checker) =
            checker_with(&[("a.ts", "const cls = styles['nav-item'];\n")]);

        assert!(checker.is_used("nav-item"));
    }

    #[test]
    fn class_list_calls_count_as_usage() {
        let (_dir, mut checker) = checker_with(&[(
            "a.js",
            "el.classList.add('visible');\nel.classList.toggle('open');\n",
        )]);

        assert!(checker.is_used("visible"));
        assert!(checker.is_used("open"));
        assert!(!checker.is_used("hidden"));
    }

    #[test]
    fn match_in_any_file_is_enough() {
        let (_dir, mut checker) = checker_with(&[
            ("a.js", "nothing relevant here\n"),
            ("b.js", "pick('chosen');\n"),
        ]);

        assert!(checker.is_used("chosen"));
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.js");
        fs::write(&good, "use('real');\n").unwrap();
        let missing = dir.path().join("deleted.js");

        let mut checker = UsageChecker::new(vec![missing, good]);

        assert!(checker.is_used("real"));
    }

    #[test]
    fn regex_metacharacters_in_class_names_are_literal() {
        let (_dir, mut checker) = checker_with(&[("a.js", "use('plain');\n")]);

        // A pathological token must not panic or false-positive.
        assert!(!checker.is_used("pl.in"));
    }
}
