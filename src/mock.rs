//! Recording stand-in for a GL context.
//!
//! Compile rules: a source containing `syntax error` fails, one containing
//! `#warning` compiles with a non-empty log. Link fails when any attached
//! source contains `link error`, and logs when one contains `link warning`.
//! `uniform T name;` and `in T name;` lines become active names, numbered
//! in order of appearance.

use std::cell::RefCell;
use std::collections::HashMap;

use log::Level;

use crate::{Diagnostics, GlApi, ShaderStage, UniformValue};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    UniformLocation(u32, String),
    AttribLocation(u32, String),
    SetUniform(u32, UniformValue),
}

#[derive(Default)]
struct State {
    next_id: u32,
    sources: HashMap<u32, String>,
    attached: HashMap<u32, Vec<u32>>,
    bound: Option<u32>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct MockGl {
    state: RefCell<State>,
    pub fail_create: bool,
}

impl MockGl {
    /// Every create call is refused.
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn source(&self, shader: u32) -> Option<String> {
        self.state.borrow().sources.get(&shader).cloned()
    }

    pub fn bound(&self) -> Option<u32> {
        self.state.borrow().bound
    }

    pub fn bind_directly(&self, program: u32) {
        self.state.borrow_mut().bound = Some(program);
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }

    fn linked_sources(&self, program: u32) -> Vec<String> {
        let state = self.state.borrow();
        state
            .attached
            .get(&program)
            .into_iter()
            .flatten()
            .filter_map(|s| state.sources.get(s).cloned())
            .collect()
    }

    fn declared(&self, program: u32, keyword: &str) -> Vec<String> {
        self.linked_sources(program)
            .iter()
            .flat_map(|src| src.lines())
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                if tokens.next() != Some(keyword) {
                    return None;
                }
                tokens.last().map(|name| name.trim_end_matches(';').to_string())
            })
            .collect()
    }
}

impl GlApi for MockGl {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of handles".to_string());
        }
        let id = self.next_id();
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.state
            .borrow_mut()
            .sources
            .insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        let state = self.state.borrow();
        !state.sources[&shader].contains("syntax error")
    }

    fn shader_info_log(&self, shader: u32) -> String {
        let state = self.state.borrow();
        let src = &state.sources[&shader];
        if src.contains("syntax error") {
            "0:1(1): error: syntax error".to_string()
        } else if src.contains("#warning") {
            "0:1(1): warning: unused variable".to_string()
        } else {
            String::new()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.fail_create {
            return Err("out of handles".to_string());
        }
        let id = self.next_id();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.state
            .borrow_mut()
            .attached
            .entry(program)
            .or_default()
            .push(shader);
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        !self
            .linked_sources(program)
            .iter()
            .any(|s| s.contains("link error"))
    }

    fn program_info_log(&self, program: u32) -> String {
        let sources = self.linked_sources(program);
        if sources.iter().any(|s| s.contains("link error")) {
            "error: unresolved varying".to_string()
        } else if sources.iter().any(|s| s.contains("link warning")) {
            "warning: varying unused".to_string()
        } else {
            String::new()
        }
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().bound = program;
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        self.record(Call::UniformLocation(program, name.to_string()));
        self.declared(program, "uniform")
            .iter()
            .position(|n| n == name)
            .map(|i| i as u32)
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.record(Call::AttribLocation(program, name.to_string()));
        self.declared(program, "in")
            .iter()
            .position(|n| n == name)
            .map(|i| i as u32)
    }

    fn set_uniform(&self, location: &u32, value: UniformValue) {
        self.record(Call::SetUniform(*location, value));
    }
}

#[derive(Default)]
pub struct CollectingSink {
    records: RefCell<Vec<(Level, String)>>,
}

impl CollectingSink {
    pub fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.borrow().iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Diagnostics for CollectingSink {
    fn emit(&self, level: Level, message: &str) {
        self.records.borrow_mut().push((level, message.to_string()));
    }
}

pub const VERTEX_SRC: &str = "\
#version 330
uniform mat4 matMV;
uniform mat4 matPrj;
in vec3 position;
void main() { gl_Position = matPrj * matMV * vec4(position, 1.0); }
";

pub const FRAGMENT_SRC: &str = "\
#version 330
uniform vec3 color;
out vec4 FragColor;
void main() { FragColor = vec4(color, 1.0); }
";
