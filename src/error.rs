use std::path::PathBuf;

use crate::ShaderStage;

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("could not find file: {}", .0.display())]
    NotFound(PathBuf),
    #[error("could not open shader {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to allocate {len} bytes for shader {}", .path.display())]
    Alloc {
        path: PathBuf,
        len: u64,
        #[source]
        source: std::collections::TryReserveError,
    },
    #[error("shader {} is not valid UTF-8", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("could not create {what} object: {message}")]
    CreateObject { what: &'static str, message: String },
    #[error("error while compiling {stage} shader {file}:\n{log}")]
    Compile {
        stage: ShaderStage,
        file: String,
        log: String,
    },
    #[error("error while linking shader program:\n{log}")]
    Link { log: String },
    #[error("shader program is already loaded")]
    AlreadyLoaded,
}
