//! # Types
//!
//! Platform-agnostic types used throughout the inspector.
//!
//! These types abstract away platform-specific details, allowing the rest of
//! the crate to work with concepts like "process ID" and "source location"
//! without knowing whether we're on macOS, Linux, or Windows.

pub mod address;
pub mod process;
pub mod symbols;

// Re-export all public types
pub use address::Address;
pub use process::{Architecture, ProcessId, ProcessRecord};
pub use symbols::{SourceLocation, SymbolLanguage, SymbolName};
