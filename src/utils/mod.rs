//! Display helpers

pub mod display;

pub use display::{Color, ColorOutput, Renderer, TerminalRenderer};
