use crate::scanner::{normalize_path, path_to_string};
use std::path::Path;

/// Ordered classpath entries relative to a root prefix.
#[derive(Debug, Clone)]
pub struct Classpath {
    root_prefix: String,
    entries: Vec<String>,
}

impl Classpath {
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Self {
        Self {
            root_prefix: path_to_string(&normalize_path(root_dir)),
            entries: Vec::new(),
        }
    }

    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    /// Removes the root prefix from `path` when the path text starts with it.
    ///
    /// The test is on characters, not path segments: a root of `/a/b` also
    /// strips `/a/bc/x.jar` down to `c/x.jar`.
    pub fn strip_root(&self, path: &Path) -> String {
        let path = path_to_string(path);
        match path.strip_prefix(self.root_prefix.as_str()) {
            Some(rest) => rest.to_string(),
            None => path,
        }
    }

    /// Appends a discovered file and returns the entry as recorded.
    pub fn push(&mut self, path: &Path) -> &str {
        let entry = self.strip_root(path);
        self.entries.push(entry);
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    pub fn sort(&mut self) {
        self.entries.sort();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn join(&self, delimiter: &str) -> String {
        self.entries.join(delimiter)
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
