//! Application layer - runs the scaffolding use case

pub mod setup_runner;
pub mod traits;
pub mod verification;

pub use setup_runner::*;
pub use traits::*;
pub use verification::*;
