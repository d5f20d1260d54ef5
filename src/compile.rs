use crate::{Diagnostics, GlApi, ShaderError, ShaderStage};

/// Compiles one stage. `file_name` only labels diagnostics; `None` shows up
/// as `unknown`.
pub fn compile_shader<G: GlApi + ?Sized>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
    file_name: Option<&str>,
    diagnostics: &dyn Diagnostics,
) -> Result<G::Shader, ShaderError> {
    let file_name = file_name.unwrap_or("unknown");
    let shader = gl.create_shader(stage).map_err(|message| {
        diagnostics.error(&format!(
            "Could not create {stage} shader for {file_name}: {message}"
        ));
        ShaderError::CreateObject {
            what: "shader",
            message,
        }
    })?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    let info_log = gl.shader_info_log(shader);
    if !gl.shader_compile_status(shader) {
        diagnostics.error(&format!("Error while compiling {file_name}:\n{info_log}"));
        gl.delete_shader(shader);
        return Err(ShaderError::Compile {
            stage,
            file: file_name.to_string(),
            log: info_log,
        });
    }
    if !info_log.trim().is_empty() {
        diagnostics.warn(&format!("{file_name}:\n{info_log}"));
    }
    Ok(shader)
}

pub fn link_program<G: GlApi + ?Sized>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
    diagnostics: &dyn Diagnostics,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().map_err(|message| {
        diagnostics.error(&format!("Could not create shader program: {message}"));
        ShaderError::CreateObject {
            what: "program",
            message,
        }
    })?;
    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    let info_log = gl.program_info_log(program);
    if !gl.program_link_status(program) {
        diagnostics.error(&format!("Error while linking shader program:\n{info_log}"));
        gl.delete_program(program);
        return Err(ShaderError::Link { log: info_log });
    }
    if !info_log.trim().is_empty() {
        diagnostics.warn(&info_log);
    }
    Ok(program)
}
