// Monoline library exports

pub mod app;
pub mod cli;
pub mod config;
pub mod display;

pub use app::App;
pub use cli::Args;
pub use config::Config;
pub use display::{CursorStyle, Display};
