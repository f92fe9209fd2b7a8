//! Case cycling - Elm-style style rotation for selected text
//!
//! This crate rotates the text under one or more selections through a
//! configurable sequence of case styles (const, camel, snake, kebab, ...).
//! Repeated invocations always convert from the recovered original text, so
//! styles rotate instead of compounding, and styles that would leave every
//! selection unchanged are skipped.

pub mod case;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod cycle;
pub mod messages;
pub mod model;
pub mod orchestrator;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use case::CaseVariant;
pub use commands::Cmd;
pub use config::CycleConfig;
pub use cycle::CaseOrder;
pub use messages::{Direction, Msg};
pub use model::{AppModel, Session};
pub use orchestrator::EditResult;
