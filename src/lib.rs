//! Mirage scaffolding library
//!
//! Installs `miragejs` and `@types/miragejs` with the project's package
//! manager, checks they landed in `package.json` and `node_modules`, then
//! writes the Mirage mock-server config, the application bootstrap, the
//! environment config and `tsconfig.json`.
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod error;
pub mod generation;
pub mod infrastructure;

pub use application::{SetupReport, SetupRunner};
pub use config::SetupConfig;
pub use error::{Result, SetupError};
