//! Engine error type.
//!
//! Only resource creation can fail at runtime (render target, textures) plus
//! configuration I/O. All of these are reported at startup and are fatal
//! for the demo.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Render target failed to create, reason='{0}'")]
    RenderTargetCreation(String),

    #[error("Failed to load texture '{path}', reason='{reason}'")]
    TextureLoad { path: PathBuf, reason: String },

    #[error("Config error, reason='{0}'")]
    Config(String),
}
