//! TUI screen components
//!
//! Contains individual screen implementations for each application screen.

pub mod generator;
pub mod viewer;

pub use generator::{FormField, GeneratorEvent, GeneratorScreen};
pub use viewer::ViewerScreen;
