use serde::Deserialize;

/// Terminal (or last reported) state of the agent controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentState {
    Loading,
    Running,
    AwaitingUserInput,
    Finished,
    Stopped,
    Paused,
    Error,
    #[serde(other)]
    Unknown,
}

/// One entry of the controller's event history. Only the textual content
/// matters to this client; everything else the runtime attaches is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Event {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            content: Some(content.into()),
        }
    }
}

/// Final state object returned by the runtime's controller after `ask`.
///
/// The client has no visibility into the loop that produced it; it only reads
/// the terminal state and scans the history for generated content.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalState {
    pub agent_state: AgentState,
    #[serde(default)]
    pub iterations: u32,
    #[serde(default)]
    pub history: Vec<Event>,
}

impl FinalState {
    pub fn is_finished(&self) -> bool {
        self.agent_state == AgentState::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_controller_result() {
        let state: FinalState = serde_json::from_str(
            r#"{
                "agent_state": "finished",
                "iterations": 3,
                "history": [
                    { "source": "user", "content": "write hello.py" },
                    { "source": "agent", "content": "done" }
                ]
            }"#,
        )
        .unwrap();
        assert!(state.is_finished());
        assert_eq!(state.iterations, 3);
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].content.as_deref(), Some("done"));
    }

    #[test]
    fn unknown_agent_state_does_not_fail() {
        let state: FinalState =
            serde_json::from_str(r#"{ "agent_state": "rate_limited" }"#).unwrap();
        assert_eq!(state.agent_state, AgentState::Unknown);
        assert!(state.history.is_empty());
    }
}
