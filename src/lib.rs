//! Redactgate - secret redaction between an AI coding assistant and its
//! upstream model provider
//!
//! Redactgate sits on the request/response path of an AI coding
//! assistant. On the way out it replaces detected secrets with
//! encrypted placeholders; on the way back it restores them — even when
//! a placeholder or the secret text is split across streamed chunks.
//! No real secret ever reaches the upstream model.
//!
//! ## Architecture
//!
//! ```text
//! client request
//!       │
//!       ▼
//! ┌────────────────────────────────────────────┐
//! │ SequentialPipeline (input, single-shot)    │
//! │   SecretRedactionStep ── SecretVault ──┐   │
//! │   VersionStep, analysis steps...       │   │
//! └──────────────┬─────────────────────────┼───┘
//!                │ redacted request        │
//!                ▼                         │
//!        upstream provider (external)      │ SessionCrypto
//!                │ streamed chunks         │ (AES-256-GCM,
//!                ▼                         │  per-session keys)
//! ┌──────────────────────────────────────┐ │
//! │ StreamingPipeline (output, per-chunk)│ │
//! │   SecretUnredactionStep ◄────────────┼─┘
//! │   CodeCommentStep, notifier...       │
//! └──────────────┬───────────────────────┘
//!                ▼
//!         restored response to client
//! ```
//!
//! ## Modules
//!
//! - [`pipeline`]: input and output pipeline engines and steps
//! - [`vault`]: session-scoped placeholder-to-secret store
//! - [`crypto`]: per-session key lifecycle and AEAD encryption
//! - [`scanner`]: secret detection over request text
//! - [`context`]: request-scoped alerts, flags, and snippets
//! - [`snippets`]: fenced code block extraction
//! - [`types`]: normalized request/chunk shapes
//! - [`config`]: configuration management
//!
//! The HTTP server, provider wire-format adapters, and persistence are
//! external collaborators; this crate is the transformation core they
//! compose. All components are plain constructed values — build a
//! [`vault::SecretVault`] and the pipelines at process startup and
//! inject them where needed.

pub mod config;
pub mod context;
pub mod crypto;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod snippets;
pub mod types;
pub mod vault;

pub use config::RedactgateConfig;
pub use error::{Error, Result};
