//! Development server module.
//!
//! - [`router`] - sandbox routing middleware
//! - [`convention`] - recognized entry files and their bootstrap modules
//! - [`entry`] - idempotent writes of synthetic entry modules
//! - [`shell`] - HTML shell for synthesized pages
//! - [`transform`] - HTML transform hook applied to synthesized pages
//! - [`server`] - axum app wiring

pub mod config;
pub mod convention;
pub mod entry;
pub mod router;
pub mod server;
pub mod shell;
pub mod transform;

// Re-exports
pub use config::DevConfig;
pub use convention::{EntryConvention, SYNTHETIC_ENTRY_PREFIX};
pub use router::{classify_path, route_sandbox, Route, SandboxRouter};
pub use server::DevServer;
pub use transform::{HtmlTransform, Passthrough, TagInjector, TransformError};
