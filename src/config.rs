use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DELIMITER: &str = ":";

/// Order in which entries appear in the manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Directory-listing order as produced by the walk.
    #[default]
    Traversal,
    /// Lexicographic by final entry string.
    Sorted,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub root_dir: PathBuf,
    pub lib_dir: PathBuf,
    pub output_file: PathBuf,
    pub delimiter: String,
    pub order: TraversalOrder,
}

impl Config {
    pub fn new<R, L, O>(root_dir: R, lib_dir: L, output_file: O) -> Self
    where
        R: Into<PathBuf>,
        L: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            root_dir: root_dir.into(),
            lib_dir: lib_dir.into(),
            output_file: output_file.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            order: TraversalOrder::default(),
        }
    }

    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_sorted(self, sorted: bool) -> Self {
        let order = if sorted {
            TraversalOrder::Sorted
        } else {
            TraversalOrder::Traversal
        };
        self.with_order(order)
    }
}
