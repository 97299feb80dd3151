//! Redactgate configuration management

use serde::{Deserialize, Serialize};

/// Main redactgate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactgateConfig {
    /// Crypto configuration
    #[serde(default)]
    pub crypto: CryptoConfig,

    /// Streaming (output pipeline) configuration
    #[serde(default)]
    pub streaming: StreamingConfig,

    /// Secret scanner rules
    #[serde(default = "default_scanner_rules")]
    pub scanner_rules: Vec<ScannerRule>,
}

impl Default for RedactgateConfig {
    fn default() -> Self {
        Self {
            crypto: CryptoConfig::default(),
            streaming: StreamingConfig::default(),
            scanner_rules: default_scanner_rules(),
        }
    }
}

/// Crypto configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// Session key and embedded-token lifetime in seconds
    pub session_key_lifetime_secs: u64,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            session_key_lifetime_secs: 600,
        }
    }
}

/// Streaming (output pipeline) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamingConfig {
    /// Maximum bytes a reassembly buffer may hold before it is
    /// force-flushed verbatim (safety valve against a delimiter
    /// prefix that never terminates)
    pub max_hold_bytes: usize,

    /// Emit a one-time notice chunk when the input side redacted secrets
    pub redaction_notice: bool,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            max_hold_bytes: 8192,
            redaction_notice: true,
        }
    }
}

/// A single secret-scanning rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerRule {
    /// Rule name
    pub name: String,

    /// Regex pattern to match
    pub pattern: String,

    /// Service the secret belongs to (e.g. "aws", "github")
    pub service: String,

    /// Kind of secret (e.g. "access_key", "token")
    pub kind: String,
}

/// Default secret-scanning rules
pub fn default_scanner_rules() -> Vec<ScannerRule> {
    vec![
        ScannerRule {
            name: "aws_access_key".to_string(),
            pattern: r"\bAKIA[0-9A-Z]{16}\b".to_string(),
            service: "aws".to_string(),
            kind: "access_key".to_string(),
        },
        ScannerRule {
            name: "aws_secret_key".to_string(),
            pattern: r#"(?i)aws_secret_access_key\s*[:=]\s*['"]?([A-Za-z0-9/+=]{40})['"]?"#
                .to_string(),
            service: "aws".to_string(),
            kind: "secret_key".to_string(),
        },
        ScannerRule {
            name: "github_token".to_string(),
            pattern: r"\bgh[pous]_[A-Za-z0-9]{36}\b".to_string(),
            service: "github".to_string(),
            kind: "token".to_string(),
        },
        ScannerRule {
            name: "openai_api_key".to_string(),
            pattern: r"\bsk-[A-Za-z0-9]{20,}\b".to_string(),
            service: "openai".to_string(),
            kind: "api_key".to_string(),
        },
        ScannerRule {
            name: "generic_secret".to_string(),
            pattern: r#"(?i)\b(?:api[_-]?key|secret[_-]?key|access[_-]?token)\s*[:=]\s*['"]?([A-Za-z0-9_\-]{20,})['"]?"#
                .to_string(),
            service: "generic".to_string(),
            kind: "secret".to_string(),
        },
    ]
}
