//! mdeval core - evaluate script snippets inside markdown documents
//!
//! This crate contains the evaluation pipeline, independent of any host UI:
//! - Document model with Rope-based text storage
//! - Linewise selection model
//! - Fenced-code-block context classification
//! - Result formatting and insertion
//! - Script runtime abstraction and subprocess runtime
//! - Configuration management

pub mod config;
pub mod doc;
pub mod editor;
pub mod fence;
pub mod insert;
pub mod outcome;
pub mod runtime;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use doc::Document;
pub use editor::{DocumentEditor, Editor};
pub use fence::FenceContext;
pub use outcome::Outcome;
pub use runtime::{CommandRuntime, Runtime};
pub use selection::LineSelection;
pub use session::{Preview, Session};
