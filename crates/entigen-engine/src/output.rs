//! Header providers and output sinks
//!
//! The generator only produces text; these collaborators decide what goes
//! in front of it and where it lands.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Supplies the opaque license header prepended to every file
pub trait HeaderProvider {
    fn header(&self) -> Result<String, GenerateError>;
}

/// Header held in memory (empty by default)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHeader(pub String);

impl HeaderProvider for StaticHeader {
    fn header(&self) -> Result<String, GenerateError> {
        Ok(self.0.clone())
    }
}

/// Header read verbatim from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    path: PathBuf,
}

impl FileHeader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HeaderProvider for FileHeader {
    fn header(&self) -> Result<String, GenerateError> {
        std::fs::read_to_string(&self.path).map_err(|source| GenerateError::Header {
            path: self.path.clone(),
            source,
        })
    }
}

/// Destination for generated files
pub trait OutputSink {
    /// Write `contents` as `file_name` inside the directory for `package`
    fn write(&mut self, package: &[String], file_name: &str, contents: &str) -> io::Result<PathBuf>;
}

/// Relative directory for a package chain; dotted segments are split too
pub fn package_dir(package: &[String]) -> PathBuf {
    package
        .iter()
        .flat_map(|segment| segment.split('.'))
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Writes files below a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, package: &[String], file_name: &str, contents: &str) -> io::Result<PathBuf> {
        let dir = self.root.join(package_dir(package));
        // create_dir_all succeeds when the directory already exists
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(file_name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Keeps generated files in memory, keyed by relative path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, package: &[String], file_name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = package_dir(package).join(file_name);
        self.files.insert(path.clone(), contents.to_string());
        Ok(path)
    }
}
