use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content and was left alone
    Unchanged,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only write when the content differs (keeps mtimes stable for watchers)
    #[default]
    IfChanged,
}

/// A generated output file
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file that is only rewritten when its content changes
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfChanged
            && std::fs::read_to_string(&self.path).is_ok_and(|current| current == self.content)
        {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("gql").join("types.ts");

        let result = File::new(&path, "export type A = {};\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "export type A = {};\n");
    }

    #[test]
    fn test_unchanged_content_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same").write().unwrap();
        assert_eq!(result, WriteResult::Unchanged);

        let result = File::new(&path, "changed").write().unwrap();
        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "changed");
    }

    #[test]
    fn test_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.ts");
        fs::write(&path, "same").unwrap();

        let result = File::new(&path, "same")
            .overwrite(Overwrite::Always)
            .write()
            .unwrap();
        assert_eq!(result, WriteResult::Written);
    }
}
