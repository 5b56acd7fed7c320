//! Generation domain - turns the bundled templates into artifacts

pub mod template_renderer;
pub mod templates;
pub mod types;

pub use template_renderer::*;
pub use templates::*;
pub use types::*;
