use regex::Regex;

/// Line-machine state: either between rules, or inside a brace-delimited
/// block (suppressed when the block belongs to an unused class).
#[derive(Clone, Copy)]
enum State {
    Outside,
    Inside { skip: bool, depth: i32 },
}

/// Re-emit stylesheet text line by line, omitting whole rule blocks whose
/// single-class selector fails the usage check.
///
/// Only selectors of the form `.name {` are candidates for removal. Compound,
/// comma-list, attribute, and pseudo selectors never match the pattern and
/// are always preserved, as are rules whose opening brace sits on a following
/// line. Precision over recall.
pub fn remove_unused_rules(css: &str, is_used: &mut dyn FnMut(&str) -> bool) -> String {
    let selector = Regex::new(r"^\s*\.([a-zA-Z_][\w-]*)\s*\{").expect("valid pattern");

    let mut kept: Vec<&str> = Vec::new();
    let mut state = State::Outside;

    for line in css.lines() {
        let opens = line.matches('{').count() as i32;
        let closes = line.matches('}').count() as i32;
        let net = opens - closes;

        match state {
            State::Outside => {
                let class = selector.captures(line).map(|cap| cap[1].to_string());

                match class {
                    Some(class) if !is_used(&class) => {
                        // Single-line rule: drop it whole. Multi-line rule:
                        // suppress until the block closes.
                        if net > 0 {
                            state = State::Inside {
                                skip: true,
                                depth: net,
                            };
                        }
                    }
                    _ => {
                        kept.push(line);
                        if net > 0 {
                            state = State::Inside {
                                skip: false,
                                depth: net,
                            };
                        }
                    }
                }
            }
            State::Inside { skip, depth } => {
                if !skip {
                    kept.push(line);
                }

                let depth = depth + net;
                state = if depth <= 0 {
                    State::Outside
                } else {
                    State::Inside { skip, depth }
                };
            }
        }
    }

    let mut out = kept.join("\n");
    if css.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    out
}
