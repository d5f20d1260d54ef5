use std::path::PathBuf;

use crate::{Diagnostics, LogSink, SearchPathLocator, StderrSink};

pub const ENV_SEARCH_PATH: &str = "DEL_SHADER_PATH";
pub const ENV_VERSION: &str = "DEL_SHADER_VERSION";
pub const ENV_DIAGNOSTICS: &str = "DEL_SHADER_DIAGNOSTICS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    Log,
    Stderr,
}

impl SinkKind {
    pub fn into_diagnostics(self) -> Box<dyn Diagnostics> {
        match self {
            SinkKind::Log => Box::new(LogSink),
            SinkKind::Stderr => Box::new(StderrSink),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaderConfig {
    /// Roots tried in order for relative shader paths.
    pub search_paths: Vec<PathBuf>,
    /// Prepended to sources that do not start with their own `#version`.
    pub version_header: Option<String>,
    pub sink: SinkKind,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from(".")],
            version_header: None,
            sink: SinkKind::Log,
        }
    }
}

impl ShaderConfig {
    pub fn platform_version_header() -> &'static str {
        if cfg!(target_arch = "wasm32") {
            "#version 300 es"
        } else {
            "#version 330"
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(paths) = lookup(ENV_SEARCH_PATH) {
            let paths: Vec<PathBuf> = std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !paths.is_empty() {
                config.search_paths = paths;
            }
        }
        config.version_header = match lookup(ENV_VERSION).as_deref() {
            None | Some("") => None,
            Some("platform") => Some(Self::platform_version_header().to_string()),
            Some(header) => Some(header.to_string()),
        };
        match lookup(ENV_DIAGNOSTICS).as_deref() {
            None | Some("log") => {}
            Some("stderr") => config.sink = SinkKind::Stderr,
            Some(other) => {
                log::warn!("ignoring {ENV_DIAGNOSTICS}={other:?}, expected \"log\" or \"stderr\"")
            }
        }
        config
    }

    pub fn with_platform_version_header(mut self) -> Self {
        self.version_header = Some(Self::platform_version_header().to_string());
        self
    }

    pub fn locator(&self) -> SearchPathLocator {
        SearchPathLocator::new(self.search_paths.clone())
    }
}
