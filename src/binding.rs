//! The context keeps a single "current program" slot. Every
//! [`ShaderProgram::use_program`] and [`use_shader`] call overwrites it, and
//! the last call before a draw wins. The slot is per context, and a context
//! is current on one thread only. That is why [`ShaderProgram`] is not `Send`.

use crate::{GlApi, ShaderProgram};

/// Binds `shader`, or unbinds any program when given `None`.
///
/// Returns what [`ShaderProgram::use_program`] returns, and `true` for `None`.
pub fn use_shader<G: GlApi>(gl: &G, shader: Option<&ShaderProgram<G>>) -> bool {
    match shader {
        Some(shader) => shader.use_program(),
        None => {
            gl.use_program(None);
            true
        }
    }
}
