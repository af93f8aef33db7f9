//! CLI library components for the XTbML converter.

pub mod commands;
pub mod logging;
pub mod render;
