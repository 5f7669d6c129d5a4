//! # intent-classifier
//!
//! Classifies free-text user input as a single-step **prompt** or a multi-step
//! **workflow** by delegating structured-output extraction to a locally hosted
//! language model over a tool-calling protocol. The model is asked to "call" a
//! declared classification function with arguments instead of answering in
//! prose, so its output is machine-parseable by construction.
//!
//! ## Overview
//!
//! A classification call is one prompt build, one backend round trip, and one
//! normalization. Five built-in output schemas trade accuracy, latency, and
//! complexity against each other; each schema is a static table of field
//! descriptors consumed by both the prompt builder and the tool adapter.
//! Every call produces a well-formed [`ClassificationResult`] envelope with
//! latency instrumentation; failures are encoded in the envelope, never
//! raised past the facade boundary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intent_classifier::{ClassifierBuilder, ClassifyOptions};
//!
//! #[tokio::main]
//! async fn main() -> intent_classifier::Result<()> {
//!     let classifier = ClassifierBuilder::from_env().build()?;
//!
//!     let result = classifier
//!         .classify(
//!             "create a new project with tests and documentation",
//!             ClassifyOptions::default().schema("standard"),
//!         )
//!         .await;
//!
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | Registry of named output contracts (field descriptor tables) |
//! | [`prompt`] | Deterministic classification prompt construction |
//! | [`adapter`] | Schema → tool declaration, and validation of returned arguments |
//! | [`transport`] | The backend seam: one HTTP round trip to an Ollama-compatible endpoint |
//! | [`normalize`] | Argument coercion and the uniform result envelope |
//! | [`client`] | The [`Classifier`] facade, builder, and configuration |
//! | [`types`] | Core type definitions (result envelope, tool-calling wire shapes) |

pub mod adapter;
pub mod client;
pub mod normalize;
pub mod prompt;
pub mod schema;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Classifier, ClassifierBuilder, ClassifierConfig, ClassifyOptions};
pub use schema::{FieldDescriptor, FieldKind, SchemaDefinition};
pub use transport::{ChatBackend, ChatRequest, ChatResponse, HttpBackend};
pub use types::{
    result::{ClassificationResult, SchemaListing},
    tool::{FunctionDefinition, ToolCall, ToolDefinition},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
