use crate::config::{Config, TraversalOrder};
use crate::manifest::Classpath;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of one run, printed in JSON mode and returned to library callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestReport {
    pub root_dir: PathBuf,
    pub lib_dir: PathBuf,
    pub output_file: PathBuf,
    pub delimiter: String,
    pub order: TraversalOrder,
    pub entry_count: usize,
    pub entries: Vec<String>,
    pub classpath: String,
    pub written: bool,
    pub bytes_written: u64,
    pub generated_at: DateTime<Utc>,
}

impl ManifestReport {
    pub fn new(config: &Config, classpath: Classpath) -> Self {
        let line = classpath.join(&config.delimiter);
        let entries = classpath.into_entries();

        Self {
            root_dir: config.root_dir.clone(),
            lib_dir: config.lib_dir.clone(),
            output_file: config.output_file.clone(),
            delimiter: config.delimiter.clone(),
            order: config.order,
            entry_count: entries.len(),
            entries,
            classpath: line,
            written: false,
            bytes_written: 0,
            generated_at: Utc::now(),
        }
    }

    pub fn mark_written(&mut self, bytes: u64) {
        self.written = true;
        self.bytes_written = bytes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_report_from_classpath() {
        let config = Config::new("/deb", "/deb/lib", "/deb/cp.txt").with_delimiter(";");
        let mut classpath = Classpath::new(&config.root_dir);
        classpath.push(Path::new("/deb/lib/a.jar"));
        classpath.push(Path::new("/deb/lib/b.jar"));

        let mut report = ManifestReport::new(&config, classpath);
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.classpath, "/lib/a.jar;/lib/b.jar");
        assert!(!report.written);

        report.mark_written(22);
        assert!(report.written);
        assert_eq!(report.bytes_written, 22);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entries"][1], "/lib/b.jar");
        assert_eq!(json["order"], "traversal");
    }
}
