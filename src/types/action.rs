use serde_json::{json, Value};

/// A request object describing an operation for the external runtime to
/// perform. Wire shape: `{"action": <kind>, "args": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Execute a shell command inside the runtime sandbox.
    CmdRun { command: String },
    /// Read a file at an absolute path inside the runtime.
    FileRead { path: String },
    /// Write content to a file, replacing any existing content.
    FileWrite { path: String, content: String },
    /// Fetch a web page through the runtime's browser.
    BrowseUrl { url: String },
    /// Send an instruction to the agent controller.
    Message { content: String },
}

impl Action {
    /// Wire tag for this action variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::CmdRun { .. } => "run",
            Action::FileRead { .. } => "read",
            Action::FileWrite { .. } => "write",
            Action::BrowseUrl { .. } => "browse",
            Action::Message { .. } => "message",
        }
    }

    /// Serialize to the runtime event shape.
    pub fn to_wire(&self) -> Value {
        let args = match self {
            Action::CmdRun { command } => json!({ "command": command }),
            Action::FileRead { path } => json!({ "path": path }),
            Action::FileWrite { path, content } => json!({ "path": path, "content": content }),
            Action::BrowseUrl { url } => json!({ "url": url }),
            Action::Message { content } => json!({ "content": content }),
        };
        json!({ "action": self.kind(), "args": args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_run_wire_shape() {
        let wire = Action::CmdRun {
            command: "ls -la".into(),
        }
        .to_wire();
        assert_eq!(wire["action"], "run");
        assert_eq!(wire["args"]["command"], "ls -la");
    }

    #[test]
    fn file_write_wire_shape() {
        let wire = Action::FileWrite {
            path: "/workspace/hello.txt".into(),
            content: "hi".into(),
        }
        .to_wire();
        assert_eq!(wire["action"], "write");
        assert_eq!(wire["args"]["path"], "/workspace/hello.txt");
        assert_eq!(wire["args"]["content"], "hi");
    }
}
