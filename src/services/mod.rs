// Service exports
pub mod artifact;
pub mod templates;

pub use artifact::{ArtifactError, ArtifactStore};
pub use templates::{TemplateEngine, TemplateError};
