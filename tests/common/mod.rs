#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use openhands_client::{Action, AgentState, Event, FinalState, Observation, Result, Runtime};

/// In-memory runtime standing in for the OpenHands server.
///
/// Commands echo, file actions go through a HashMap, and the controller
/// returns a canned final state.
pub struct MockRuntime {
    files: Mutex<HashMap<String, String>>,
    browser_supported: bool,
    final_state: FinalState,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            browser_supported: true,
            final_state: finished_state(vec![Event::new(
                "agent",
                "Here is the code:\n```python\nprint(\"hi\")\n```\n",
            )]),
        }
    }

    /// Answer browse actions with a command observation instead, to exercise
    /// the facade's fallback path.
    pub fn without_browser(mut self) -> Self {
        self.browser_supported = false;
        self
    }

    pub fn with_final_state(mut self, state: FinalState) -> Self {
        self.final_state = state;
        self
    }
}

pub fn finished_state(history: Vec<Event>) -> FinalState {
    FinalState {
        agent_state: AgentState::Finished,
        iterations: history.len() as u32,
        history,
    }
}

#[async_trait]
impl Runtime for MockRuntime {
    async fn run_action(&self, action: &Action) -> Result<Observation> {
        Ok(match action {
            Action::CmdRun { command } => Observation::CmdOutput {
                content: format!("ran: {command}"),
                exit_code: Some(0),
            },
            Action::FileRead { path } => match self.files.lock().await.get(path) {
                Some(content) => Observation::FileRead {
                    content: content.clone(),
                },
                None => Observation::AgentError {
                    message: format!("File not found: {path}"),
                },
            },
            Action::FileWrite { path, content } => {
                self.files
                    .lock()
                    .await
                    .insert(path.clone(), content.clone());
                Observation::FileWrite {
                    path: Some(path.clone()),
                }
            }
            Action::BrowseUrl { url } => {
                if self.browser_supported {
                    Observation::BrowserOutput {
                        url: url.clone(),
                        content: format!("<html>{url}</html>"),
                        screenshot: None,
                    }
                } else {
                    Observation::CmdOutput {
                        content: "browser unavailable".into(),
                        exit_code: Some(1),
                    }
                }
            }
            Action::Message { content } => Observation::CmdOutput {
                content: content.clone(),
                exit_code: None,
            },
        })
    }

    async fn run_controller(&self, _task: &str, _max_iterations: u32) -> Result<FinalState> {
        Ok(self.final_state.clone())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
