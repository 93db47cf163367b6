use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    extension: String,
    parent_dir: Option<String>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf, extension: &str) -> Self {
        Self {
            root,
            extension: extension.to_string(),
            parent_dir: None,
            ignore_patterns: vec![],
        }
    }

    /// Only keep files whose immediate parent directory has this name.
    pub fn with_parent_dir(mut self, name: &str) -> Self {
        self.parent_dir = Some(name.to_string());
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Walk the root and collect matching files, sorted for deterministic
    /// scan order. A nonexistent root yields an empty list, not an error:
    /// a repo without one of the conventional directories simply has no
    /// endpoints on that side.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let matches_extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().as_ref() == self.extension.as_str())
            .unwrap_or(false);
        if !matches_extension {
            return false;
        }

        if let Some(parent_name) = &self.parent_dir {
            let in_parent = path
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().as_ref() == parent_name.as_str())
                .unwrap_or(false);
            if !in_parent {
                return false;
            }
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

/// TypeScript service files under the frontend service directory.
pub fn find_frontend_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf(), "ts").walk()
}

/// JAX-RS resource files: `*.java` under any `resource/` directory below the
/// backend source root, whichever org packages sit in between.
pub fn find_backend_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf(), "java")
        .with_parent_dir("resource")
        .walk()
}
