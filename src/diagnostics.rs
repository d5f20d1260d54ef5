//! Where compiler/linker messages and loading failures are reported.
//!
//! Both sinks below are first-class: pick one per [`crate::ShaderProgram`],
//! or plug in your own.

use log::Level;

pub const LOG_TARGET: &str = "del_shader";

pub trait Diagnostics {
    fn emit(&self, level: Level, message: &str);

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }
}

/// Forwards to the `log` facade under the `del_shader` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{message}");
    }
}

/// Writes failures and compiler/linker messages to the process error stream.
/// Debug and trace chatter is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl StderrSink {
    pub fn accepts(level: Level) -> bool {
        level <= Level::Info
    }
}

impl Diagnostics for StderrSink {
    fn emit(&self, level: Level, message: &str) {
        if Self::accepts(level) {
            eprintln!("{message}");
        }
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for std::rc::Rc<D> {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for std::sync::Arc<D> {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Box<D> {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}
