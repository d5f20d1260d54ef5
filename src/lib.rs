//! Load, compile and link GLSL vertex/fragment pairs on a [`glow`] context.

pub mod binding;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gl_api;
pub mod locator;
pub mod program;
pub mod source;
pub mod stage;

#[cfg(test)]
mod mock;

pub use binding::use_shader;
pub use config::{ShaderConfig, SinkKind};
pub use diagnostics::{Diagnostics, LogSink, StderrSink};
pub use error::ShaderError;
pub use gl_api::{GlApi, UniformValue};
pub use locator::{FileLocator, SearchPathLocator};
pub use program::ShaderProgram;
pub use stage::ShaderStage;
