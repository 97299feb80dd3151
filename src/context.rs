//! Request-scoped pipeline context
//!
//! Threads alerts, detection flags, and extracted code snippets between
//! steps and across the input/output pipeline boundary.

use serde::{Deserialize, Serialize};

/// An alert raised by a pipeline step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Name of the step that raised the alert
    pub step_name: String,
    /// What triggered the alert (never the secret value itself)
    pub trigger_string: String,
    /// When the alert was raised
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// A code snippet extracted from request or response content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// File path from the fence info string, if it looked like one
    pub filepath: Option<String>,
    /// Detected language, if any
    pub language: Option<String>,
    /// The snippet body
    pub code: String,
}

/// Per-request mutable context shared by all pipeline steps.
///
/// Alerts and snippets can only be appended through [`add_alert`] and
/// [`add_code_snippet`], so every alert is timestamped and attributed
/// to the step that raised it.
///
/// [`add_alert`]: PipelineContext::add_alert
/// [`add_code_snippet`]: PipelineContext::add_code_snippet
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Unique id for this request, for log correlation
    pub request_id: String,
    /// Session the request belongs to
    pub session_id: String,
    /// Whether the redaction step replaced any secrets
    pub secrets_found: bool,
    /// Whether PII was detected
    pub pii_found: bool,
    /// Whether suspicious packages were detected
    pub bad_packages_found: bool,
    /// Once set, the input pipeline stops running further steps
    pub shortcut_response: bool,
    alerts: Vec<Alert>,
    code_snippets: Vec<CodeSnippet>,
}

impl PipelineContext {
    /// Create a fresh context for one request
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            secrets_found: false,
            pii_found: false,
            bad_packages_found: false,
            shortcut_response: false,
            alerts: Vec::new(),
            code_snippets: Vec::new(),
        }
    }

    /// Append a timestamped alert attributed to the given step
    pub fn add_alert(&mut self, step_name: impl Into<String>, trigger_string: impl Into<String>) {
        self.alerts.push(Alert {
            step_name: step_name.into(),
            trigger_string: trigger_string.into(),
            timestamp: chrono::Utc::now(),
        });
    }

    /// Append an extracted code snippet
    pub fn add_code_snippet(&mut self, snippet: CodeSnippet) {
        self.code_snippets.push(snippet);
    }

    /// Alerts raised so far, in order
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Number of alerts raised by the named step
    pub fn alert_count_for(&self, step_name: &str) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.step_name == step_name)
            .count()
    }

    /// Code snippets collected so far, in order
    pub fn code_snippets(&self) -> &[CodeSnippet] {
        &self.code_snippets
    }
}

/// Per-response context for the output pipeline.
///
/// Carries the input-side [`PipelineContext`] forward and accumulates
/// the full processed content, which the code-annotation step re-scans
/// after every chunk.
#[derive(Debug)]
pub struct StreamingContext {
    /// Context produced by the input pipeline for this request
    pub input: PipelineContext,
    /// Concatenation of all content seen so far in this response
    pub processed_content: String,
}

impl StreamingContext {
    /// Create a streaming context from the input-side context
    pub fn new(input: PipelineContext) -> Self {
        Self {
            input,
            processed_content: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_alert_is_timestamped_and_attributed() {
        let mut ctx = PipelineContext::new("s1");
        let before = chrono::Utc::now();
        ctx.add_alert("secret-redaction", "aws/access_key");

        assert_eq!(ctx.alerts().len(), 1);
        let alert = &ctx.alerts()[0];
        assert_eq!(alert.step_name, "secret-redaction");
        assert_eq!(alert.trigger_string, "aws/access_key");
        assert!(alert.timestamp >= before);
    }

    #[test]
    fn test_alert_count_for() {
        let mut ctx = PipelineContext::new("s1");
        ctx.add_alert("secret-redaction", "a");
        ctx.add_alert("secret-redaction", "b");
        ctx.add_alert("code-comment", "c");

        assert_eq!(ctx.alert_count_for("secret-redaction"), 2);
        assert_eq!(ctx.alert_count_for("code-comment"), 1);
        assert_eq!(ctx.alert_count_for("missing"), 0);
    }

    #[test]
    fn test_add_code_snippet() {
        let mut ctx = PipelineContext::new("s1");
        ctx.add_code_snippet(CodeSnippet {
            filepath: None,
            language: Some("rust".to_string()),
            code: "fn main() {}".to_string(),
        });

        assert_eq!(ctx.code_snippets().len(), 1);
        assert_eq!(ctx.code_snippets()[0].language.as_deref(), Some("rust"));
    }
}
