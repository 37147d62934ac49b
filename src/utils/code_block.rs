//! Fenced code block extraction from agent output.
//!
//! This is a heuristic, not a Markdown parser. Behavior under multiple fenced
//! blocks is pinned down as: extract the first complete block (opening fence
//! line through the next fence line). Unbalanced fences yield nothing.

use crate::types::FinalState;

/// Extract the body of the first complete fenced code block in `text`.
///
/// The opening fence may carry a language tag, which is discarded along with
/// both fence lines. Returns `None` when no complete block exists.
pub fn extract_fenced_block(text: &str) -> Option<String> {
    let mut body: Option<Vec<&str>> = None;

    for line in text.lines() {
        let is_fence = line.trim_start().starts_with("```");
        match body.as_mut() {
            None => {
                if is_fence {
                    body = Some(Vec::new());
                }
            }
            Some(lines) => {
                if is_fence {
                    return Some(lines.join("\n"));
                }
                lines.push(line);
            }
        }
    }

    None
}

/// Scan a final state's history, newest event first, for generated code.
///
/// The first event whose content contains a complete fenced block wins;
/// events with unbalanced fences are skipped. Empty string when nothing
/// matches.
pub fn extract_code_from_state(state: &FinalState) -> String {
    for event in state.history.iter().rev() {
        if let Some(content) = &event.content {
            if content.contains("```") {
                if let Some(code) = extract_fenced_block(content) {
                    return code;
                }
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgentState, Event};

    fn state_with(contents: &[&str]) -> FinalState {
        FinalState {
            agent_state: AgentState::Finished,
            iterations: contents.len() as u32,
            history: contents
                .iter()
                .map(|c| Event::new("agent", *c))
                .collect(),
        }
    }

    #[test]
    fn extracts_single_python_block_exactly() {
        let state = state_with(&["Here you go:\n```python\nX\n```\nDone."]);
        assert_eq!(extract_code_from_state(&state), "X");
    }

    #[test]
    fn no_fence_yields_empty_string() {
        let state = state_with(&["no code here", "still none"]);
        assert_eq!(extract_code_from_state(&state), "");
    }

    #[test]
    fn newest_event_wins() {
        let state = state_with(&[
            "```python\nold = 1\n```",
            "```python\nnew = 2\n```",
        ]);
        assert_eq!(extract_code_from_state(&state), "new = 2");
    }

    #[test]
    fn first_complete_block_of_many() {
        let text = "```rust\nfn a() {}\n```\ntext\n```rust\nfn b() {}\n```";
        assert_eq!(extract_fenced_block(text).as_deref(), Some("fn a() {}"));
    }

    #[test]
    fn unbalanced_fence_yields_nothing() {
        assert_eq!(extract_fenced_block("```python\nX"), None);
    }

    #[test]
    fn unbalanced_event_skipped_for_older_complete_one() {
        let state = state_with(&["```python\nok = 1\n```", "```python\nbroken"]);
        assert_eq!(extract_code_from_state(&state), "ok = 1");
    }

    #[test]
    fn multiline_body_preserved_without_fence_lines() {
        let text = "```python\ndef f():\n    return 1\n```";
        assert_eq!(
            extract_fenced_block(text).as_deref(),
            Some("def f():\n    return 1")
        );
    }
}
