//! The slice of the graphics context a shader program needs.
//!
//! Every call here must happen on the thread that owns the current context.

use std::rc::Rc;
use std::sync::Arc;

use glow::HasContext as _;

use crate::ShaderStage;

/// Value for `glUniform{1,2,3,4}{i,f}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    I1(i32),
    I2([i32; 2]),
    I3([i32; 3]),
    I4([i32; 4]),
    F1(f32),
    F2([f32; 2]),
    F3([f32; 3]),
    F4([f32; 4]),
}

impl From<i32> for UniformValue {
    fn from(x: i32) -> Self {
        UniformValue::I1(x)
    }
}

impl From<[i32; 2]> for UniformValue {
    fn from(v: [i32; 2]) -> Self {
        UniformValue::I2(v)
    }
}

impl From<[i32; 3]> for UniformValue {
    fn from(v: [i32; 3]) -> Self {
        UniformValue::I3(v)
    }
}

impl From<[i32; 4]> for UniformValue {
    fn from(v: [i32; 4]) -> Self {
        UniformValue::I4(v)
    }
}

impl From<f32> for UniformValue {
    fn from(x: f32) -> Self {
        UniformValue::F1(x)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(v: [f32; 2]) -> Self {
        UniformValue::F2(v)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(v: [f32; 3]) -> Self {
        UniformValue::F3(v)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(v: [f32; 4]) -> Self {
        UniformValue::F4(v)
    }
}

impl From<(i32, i32)> for UniformValue {
    fn from((x, y): (i32, i32)) -> Self {
        UniformValue::I2([x, y])
    }
}

impl From<(i32, i32, i32)> for UniformValue {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        UniformValue::I3([x, y, z])
    }
}

impl From<(i32, i32, i32, i32)> for UniformValue {
    fn from((x, y, z, w): (i32, i32, i32, i32)) -> Self {
        UniformValue::I4([x, y, z, w])
    }
}

impl From<(f32, f32)> for UniformValue {
    fn from((x, y): (f32, f32)) -> Self {
        UniformValue::F2([x, y])
    }
}

impl From<(f32, f32, f32)> for UniformValue {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        UniformValue::F3([x, y, z])
    }
}

impl From<(f32, f32, f32, f32)> for UniformValue {
    fn from((x, y, z, w): (f32, f32, f32, f32)) -> Self {
        UniformValue::F4([x, y, z, w])
    }
}

pub trait GlApi {
    type Shader: Copy + std::fmt::Debug;
    type Program: Copy + std::fmt::Debug;
    type UniformLocation: std::fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);

    /// `None` unbinds whatever program is active.
    fn use_program(&self, program: Option<Self::Program>);
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn set_uniform(&self, location: &Self::UniformLocation, value: UniformValue);
}

impl GlApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { glow::HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { glow::HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { glow::HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { glow::HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { glow::HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { glow::HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { glow::HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { glow::HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { glow::HasContext::use_program(self, program) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.get_attrib_location(program, name) }
    }

    fn set_uniform(&self, location: &Self::UniformLocation, value: UniformValue) {
        let loc = Some(location);
        unsafe {
            match value {
                UniformValue::I1(x) => self.uniform_1_i32(loc, x),
                UniformValue::I2([x, y]) => self.uniform_2_i32(loc, x, y),
                UniformValue::I3([x, y, z]) => self.uniform_3_i32(loc, x, y, z),
                UniformValue::I4([x, y, z, w]) => self.uniform_4_i32(loc, x, y, z, w),
                UniformValue::F1(x) => self.uniform_1_f32(loc, x),
                UniformValue::F2([x, y]) => self.uniform_2_f32(loc, x, y),
                UniformValue::F3([x, y, z]) => self.uniform_3_f32(loc, x, y, z),
                UniformValue::F4([x, y, z, w]) => self.uniform_4_f32(loc, x, y, z, w),
            }
        }
    }
}

macro_rules! forward_gl_api {
    ($ptr:ident) => {
        impl<G: GlApi + ?Sized> GlApi for $ptr<G> {
            type Shader = G::Shader;
            type Program = G::Program;
            type UniformLocation = G::UniformLocation;

            fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
                (**self).create_shader(stage)
            }
            fn shader_source(&self, shader: Self::Shader, source: &str) {
                (**self).shader_source(shader, source)
            }
            fn compile_shader(&self, shader: Self::Shader) {
                (**self).compile_shader(shader)
            }
            fn shader_compile_status(&self, shader: Self::Shader) -> bool {
                (**self).shader_compile_status(shader)
            }
            fn shader_info_log(&self, shader: Self::Shader) -> String {
                (**self).shader_info_log(shader)
            }
            fn delete_shader(&self, shader: Self::Shader) {
                (**self).delete_shader(shader)
            }
            fn create_program(&self) -> Result<Self::Program, String> {
                (**self).create_program()
            }
            fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
                (**self).attach_shader(program, shader)
            }
            fn link_program(&self, program: Self::Program) {
                (**self).link_program(program)
            }
            fn program_link_status(&self, program: Self::Program) -> bool {
                (**self).program_link_status(program)
            }
            fn program_info_log(&self, program: Self::Program) -> String {
                (**self).program_info_log(program)
            }
            fn delete_program(&self, program: Self::Program) {
                (**self).delete_program(program)
            }
            fn use_program(&self, program: Option<Self::Program>) {
                (**self).use_program(program)
            }
            fn uniform_location(
                &self,
                program: Self::Program,
                name: &str,
            ) -> Option<Self::UniformLocation> {
                (**self).uniform_location(program, name)
            }
            fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
                (**self).attrib_location(program, name)
            }
            fn set_uniform(&self, location: &Self::UniformLocation, value: UniformValue) {
                (**self).set_uniform(location, value)
            }
        }
    };
}

forward_gl_api!(Rc);
forward_gl_api!(Arc);
