//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and the view state controller.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{GeneratorEvent, GeneratorScreen, ViewerScreen};
pub use state::{NavigationAction, Screen, ViewState};
pub use tui::Tui;
