use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The runtime's response object corresponding to a submitted action.
///
/// Parsing is tolerant: any event whose `observation` tag is not recognized is
/// preserved as [`Observation::Unknown`] so fallback paths can still render a
/// string form of whatever came back.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Output of a shell command.
    CmdOutput {
        content: String,
        exit_code: Option<i64>,
    },
    /// Content of a read file.
    FileRead { content: String },
    /// Acknowledgement of a file write.
    FileWrite { path: Option<String> },
    /// Rendered page from a browse action.
    BrowserOutput {
        url: String,
        content: String,
        /// Base64-encoded screenshot, when the runtime captured one.
        screenshot: Option<String>,
    },
    /// Error reported by the runtime for the submitted action.
    AgentError { message: String },
    /// Unrecognized observation variant, kept verbatim.
    Unknown(Value),
}

/// Raw event shape as the runtime sends it.
#[derive(Deserialize)]
struct RawObservation {
    observation: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    extras: Value,
}

impl Observation {
    /// Parse a runtime event into an observation variant.
    pub fn from_wire(value: Value) -> Self {
        let raw: RawObservation = match serde_json::from_value(value.clone()) {
            Ok(raw) => raw,
            Err(_) => return Observation::Unknown(value),
        };

        match raw.observation.as_str() {
            "run" => Observation::CmdOutput {
                content: raw.content,
                exit_code: raw.extras.get("exit_code").and_then(Value::as_i64),
            },
            "read" => Observation::FileRead {
                content: raw.content,
            },
            "write" => Observation::FileWrite {
                path: raw
                    .extras
                    .get("path")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "browse" => Observation::BrowserOutput {
                url: raw
                    .extras
                    .get("url")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                content: raw.content,
                screenshot: raw
                    .extras
                    .get("screenshot")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            "error" => Observation::AgentError {
                message: raw.content,
            },
            _ => Observation::Unknown(value),
        }
    }
}

/// String form used by every "unwrap failed, fall back" path in the facade.
impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::CmdOutput { content, .. } => f.write_str(content),
            Observation::FileRead { content } => f.write_str(content),
            Observation::FileWrite { path } => match path {
                Some(path) => write!(f, "wrote {path}"),
                None => f.write_str("file written"),
            },
            Observation::BrowserOutput { content, .. } => f.write_str(content),
            Observation::AgentError { message } => f.write_str(message),
            Observation::Unknown(value) => f.write_str(&value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_cmd_output() {
        let obs = Observation::from_wire(json!({
            "observation": "run",
            "content": "total 0\n",
            "extras": { "command": "ls -la", "exit_code": 0 }
        }));
        assert_eq!(
            obs,
            Observation::CmdOutput {
                content: "total 0\n".into(),
                exit_code: Some(0)
            }
        );
    }

    #[test]
    fn parses_browser_output() {
        let obs = Observation::from_wire(json!({
            "observation": "browse",
            "content": "<html></html>",
            "extras": { "url": "https://example.com", "screenshot": "aGk=" }
        }));
        match obs {
            Observation::BrowserOutput {
                url,
                content,
                screenshot,
            } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(content, "<html></html>");
                assert_eq!(screenshot.as_deref(), Some("aGk="));
            }
            other => panic!("expected BrowserOutput, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_variant_kept_verbatim() {
        let wire = json!({ "observation": "recall", "content": "x" });
        let obs = Observation::from_wire(wire.clone());
        assert_eq!(obs, Observation::Unknown(wire));
    }

    #[test]
    fn display_falls_back_to_json_for_unknown() {
        let obs = Observation::from_wire(json!({ "kind": "???" }));
        assert!(obs.to_string().contains("???"));
    }
}
