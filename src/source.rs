use std::io::Read as _;
use std::path::Path;

use crate::{Diagnostics, FileLocator, ShaderError};

/// Resolves `path` through `locator` and reads the whole file as UTF-8.
pub fn read_source(
    locator: &dyn FileLocator,
    path: &Path,
    diagnostics: &dyn Diagnostics,
) -> Result<String, ShaderError> {
    let Some(located) = locator.find_file(path) else {
        diagnostics.error(&format!("Could not find file: {}", path.display()));
        return Err(ShaderError::NotFound(path.to_path_buf()));
    };
    diagnostics.debug(&format!("Loading shader: {}...", located.display()));

    let io_error = |source: std::io::Error| {
        diagnostics.error(&format!(
            "Could not open shader {}: {source}",
            path.display()
        ));
        ShaderError::Io {
            path: path.to_path_buf(),
            source,
        }
    };
    let file = std::fs::File::open(&located).map_err(io_error)?;
    let len = file.metadata().map_err(io_error)?.len();

    let capacity = usize::try_from(len).unwrap_or(usize::MAX).saturating_add(1);
    let mut buf = Vec::<u8>::new();
    if let Err(source) = buf.try_reserve_exact(capacity) {
        diagnostics.error(&format!(
            "failed to allocate memory for {}",
            path.display()
        ));
        return Err(ShaderError::Alloc {
            path: path.to_path_buf(),
            len,
            source,
        });
    }
    file.take(len).read_to_end(&mut buf).map_err(io_error)?;

    String::from_utf8(buf).map_err(|source| {
        diagnostics.error(&format!("Shader {} is not valid UTF-8", path.display()));
        ShaderError::Encoding {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Puts `header` in front of `source` unless it already declares a version.
pub fn with_version_header<'a>(
    source: &'a str,
    header: Option<&str>,
) -> std::borrow::Cow<'a, str> {
    match header {
        Some(header) if !declares_version(source) => format!("{header}\n{source}").into(),
        _ => source.into(),
    }
}

/// `#version` may only be preceded by whitespace and comments.
fn declares_version(source: &str) -> bool {
    let mut rest = source;
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix("//") {
            rest = after.find('\n').map_or("", |i| &after[i..]);
        } else if let Some(after) = rest.strip_prefix("/*") {
            match after.find("*/") {
                Some(i) => rest = &after[i + 2..],
                None => return false,
            }
        } else {
            return rest.starts_with("#version");
        }
    }
}
