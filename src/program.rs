//! A linked vertex + fragment program that owns its GL objects.

use std::marker::PhantomData;
use std::path::Path;

use crate::compile::{compile_shader, link_program};
use crate::source::{read_source, with_version_header};
use crate::{
    Diagnostics, FileLocator, GlApi, LogSink, SearchPathLocator, ShaderConfig, ShaderError,
    ShaderStage, UniformValue,
};

/// Owns up to three GL objects (vertex shader, fragment shader, program) and
/// deletes whichever it holds when dropped.
///
/// Filled in once by [`ShaderProgram::load`] or [`ShaderProgram::load_sources`].
/// Not `Send`: it must stay on the thread that owns the context.
pub struct ShaderProgram<G: GlApi> {
    gl: G,
    locator: Box<dyn FileLocator>,
    diagnostics: Box<dyn Diagnostics>,
    version_header: Option<String>,
    vertex: Option<G::Shader>,
    fragment: Option<G::Shader>,
    program: Option<G::Program>,
    _not_send: PhantomData<*const ()>,
}

impl<G: GlApi> ShaderProgram<G> {
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            locator: Box::new(SearchPathLocator::default()),
            diagnostics: Box::new(LogSink),
            version_header: None,
            vertex: None,
            fragment: None,
            program: None,
            _not_send: PhantomData,
        }
    }

    pub fn from_config(gl: G, config: &ShaderConfig) -> Self {
        let mut program = Self::new(gl)
            .with_locator(config.locator())
            .with_version_header(config.version_header.clone());
        program.diagnostics = config.sink.into_diagnostics();
        program
    }

    pub fn with_locator(mut self, locator: impl FileLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    pub fn with_version_header(mut self, header: Option<String>) -> Self {
        self.version_header = header;
        self
    }

    /// Reads, compiles and links a vertex/fragment file pair.
    ///
    /// On error the objects created before the failing step are kept (and
    /// released on drop); the instance cannot be loaded again.
    pub fn load(
        &mut self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<(), ShaderError> {
        self.ensure_empty()?;
        let vertex = self.compile_file(vertex_path.as_ref(), ShaderStage::Vertex)?;
        self.vertex = Some(vertex);
        let fragment = self.compile_file(fragment_path.as_ref(), ShaderStage::Fragment)?;
        self.fragment = Some(fragment);
        self.link(vertex, fragment)
    }

    /// Same as [`Self::load`] with the sources already in memory.
    pub fn load_sources(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<(), ShaderError> {
        self.ensure_empty()?;
        let vertex = self.compile(ShaderStage::Vertex, vertex_source, None)?;
        self.vertex = Some(vertex);
        let fragment = self.compile(ShaderStage::Fragment, fragment_source, None)?;
        self.fragment = Some(fragment);
        self.link(vertex, fragment)
    }

    fn ensure_empty(&self) -> Result<(), ShaderError> {
        if self.vertex.is_some() || self.fragment.is_some() || self.program.is_some() {
            return Err(ShaderError::AlreadyLoaded);
        }
        Ok(())
    }

    fn compile_file(&self, path: &Path, stage: ShaderStage) -> Result<G::Shader, ShaderError> {
        let source = read_source(&*self.locator, path, &*self.diagnostics)?;
        let file_name = path.display().to_string();
        self.compile(stage, &source, Some(&file_name))
    }

    fn compile(
        &self,
        stage: ShaderStage,
        source: &str,
        file_name: Option<&str>,
    ) -> Result<G::Shader, ShaderError> {
        let source = with_version_header(source, self.version_header.as_deref());
        compile_shader(&self.gl, stage, &source, file_name, &*self.diagnostics)
    }

    fn link(&mut self, vertex: G::Shader, fragment: G::Shader) -> Result<(), ShaderError> {
        let program = link_program(&self.gl, vertex, fragment, &*self.diagnostics)?;
        self.program = Some(program);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.program.is_some()
    }

    pub fn program(&self) -> Option<G::Program> {
        self.program
    }

    pub fn vertex_shader(&self) -> Option<G::Shader> {
        self.vertex
    }

    pub fn fragment_shader(&self) -> Option<G::Shader> {
        self.fragment
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Binds the program. Returns `false` and binds nothing if it was never linked.
    pub fn use_program(&self) -> bool {
        match self.program {
            Some(program) => {
                self.gl.use_program(Some(program));
                true
            }
            None => false,
        }
    }

    pub fn uniform_location(&self, name: &str) -> Option<G::UniformLocation> {
        let program = self.bound()?;
        self.gl.uniform_location(program, name)
    }

    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        let program = self.bound()?;
        self.gl.attrib_location(program, name)
    }

    /// No-op when the program is not linked or `location` is `None`.
    pub fn set_uniform(
        &self,
        location: Option<&G::UniformLocation>,
        value: impl Into<UniformValue>,
    ) {
        if self.bound().is_none() {
            return;
        }
        if let Some(location) = location {
            self.gl.set_uniform(location, value.into());
        }
    }

    fn bound(&self) -> Option<G::Program> {
        if self.use_program() {
            self.program
        } else {
            None
        }
    }
}

impl<G: GlApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        if let Some(vertex) = self.vertex.take() {
            self.gl.delete_shader(vertex);
        }
        if let Some(fragment) = self.fragment.take() {
            self.gl.delete_shader(fragment);
        }
        if let Some(program) = self.program.take() {
            self.gl.delete_program(program);
        }
    }
}

impl<G: GlApi> std::fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("vertex", &self.vertex)
            .field("fragment", &self.fragment)
            .field("program", &self.program)
            .finish()
    }
}
