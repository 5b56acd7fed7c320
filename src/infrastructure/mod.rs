//! Infrastructure layer - concrete implementations of the application ports

pub mod manifest;
pub mod output;
pub mod shell;

pub use manifest::*;
pub use output::*;
pub use shell::*;
