use std::path::{Path, PathBuf};

/// Maps a logical shader path onto an existing file.
pub trait FileLocator {
    fn find_file(&self, path: &Path) -> Option<PathBuf>;
}

/// Looks a relative path up under each root in order; absolute paths are
/// only checked for existence.
#[derive(Debug, Clone)]
pub struct SearchPathLocator {
    roots: Vec<PathBuf>,
}

impl Default for SearchPathLocator {
    fn default() -> Self {
        Self::new(vec![PathBuf::from(".")])
    }
}

impl SearchPathLocator {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn push_root(&mut self, root: impl Into<PathBuf>) {
        self.roots.push(root.into());
    }
}

impl FileLocator for SearchPathLocator {
    fn find_file(&self, path: &Path) -> Option<PathBuf> {
        if path.is_absolute() {
            return path.is_file().then(|| path.to_path_buf());
        }
        self.roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
    }
}

impl<L: FileLocator + ?Sized> FileLocator for std::rc::Rc<L> {
    fn find_file(&self, path: &Path) -> Option<PathBuf> {
        (**self).find_file(path)
    }
}

impl<L: FileLocator + ?Sized> FileLocator for std::sync::Arc<L> {
    fn find_file(&self, path: &Path) -> Option<PathBuf> {
        (**self).find_file(path)
    }
}

impl<L: FileLocator + ?Sized> FileLocator for Box<L> {
    fn find_file(&self, path: &Path) -> Option<PathBuf> {
        (**self).find_file(path)
    }
}
