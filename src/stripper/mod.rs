use regex::Regex;

/// Result of one stripping pass over a text buffer.
#[derive(Debug)]
pub struct StripOutcome {
    pub text: String,
    pub removed: u64,
}

/// Removes complete invocations of a debug-logging function from source text.
///
/// The argument-list pattern bounds parenthesis nesting to two levels by
/// construction; a call whose arguments nest three or more levels deep is
/// left in place.
pub struct DebugCallStripper {
    token: String,
    call: Regex,
    trailing_ws_line: Regex,
    newline_runs: Regex,
}

impl DebugCallStripper {
    pub fn new(debug_fn: &str) -> Self {
        let call = Regex::new(&format!(
            r"{}\s*\((?:[^()]|\((?:[^()]|\([^()]*\))*\))*\)[ \t]*;?",
            regex::escape(debug_fn)
        ))
        .expect("call pattern is valid for any escaped function name");

        Self {
            token: debug_fn.to_string(),
            call,
            trailing_ws_line: Regex::new(r"(?m)^[ \t]+$").expect("valid pattern"),
            newline_runs: Regex::new(r"\n{3,}").expect("valid pattern"),
        }
    }

    /// Strip every matched call, then normalize the whitespace left behind:
    /// whitespace-only lines become empty and runs of three or more newlines
    /// collapse to two, so at most one blank line survives.
    pub fn strip(&self, content: &str) -> StripOutcome {
        let before = self.count_tokens(content);

        let stripped = self.call.replace_all(content, "");
        let stripped = self.trailing_ws_line.replace_all(&stripped, "");
        let stripped = self.newline_runs.replace_all(&stripped, "\n\n");

        let after = self.count_tokens(&stripped);

        StripOutcome {
            text: stripped.into_owned(),
            // Token-occurrence delta, not a match count. A token embedded in an
            // unrelated string literal skews this number; it is approximate
            // telemetry, not an exact metric.
            removed: (before.saturating_sub(after)) as u64,
        }
    }

    fn count_tokens(&self, content: &str) -> usize {
        content.matches(self.token.as_str()).count()
    }
}
