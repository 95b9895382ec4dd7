use crate::error::{ClasspathError, Result};
use crate::scanner::normalize::normalize_path;
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks a library directory and reports every file beneath it.
///
/// Within each directory the files are reported first, in listing order,
/// before any subdirectory is descended. Symbolic links are never followed:
/// a link to a directory is skipped, a link to anything else is reported.
pub struct LibScanner {
    lib_dir: PathBuf,
}

impl LibScanner {
    pub fn new<P: AsRef<Path>>(lib_dir: P) -> Self {
        Self {
            lib_dir: normalize_path(lib_dir),
        }
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    /// Calls `visit` for each discovered file and returns how many were seen.
    ///
    /// A missing library directory, or one that is not a directory, yields no
    /// files. Any error raised while reading the tree aborts the walk.
    pub fn visit_files<F>(&self, mut visit: F) -> Result<usize>
    where
        F: FnMut(&Path),
    {
        if !self.is_walkable()? {
            return Ok(0);
        }

        debug!(lib_dir = %self.lib_dir.display(), "walking library directory");

        let walker = WalkDir::new(&self.lib_dir)
            .follow_links(false)
            .sort_by(files_before_directories);

        let mut count = 0;
        for entry in walker {
            let entry = entry.map_err(|source| ClasspathError::Traversal {
                path: source
                    .path()
                    .unwrap_or(&self.lib_dir)
                    .display()
                    .to_string(),
                source,
            })?;

            if is_listed(&entry) {
                debug!(path = %entry.path().display(), "discovered file");
                visit(entry.path());
                count += 1;
            }
        }

        info!(lib_dir = %self.lib_dir.display(), files = count, "finished walking library directory");
        Ok(count)
    }

    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.visit_files(|path| files.push(path.to_path_buf()))?;
        Ok(files)
    }

    fn is_walkable(&self) -> Result<bool> {
        match fs::metadata(&self.lib_dir) {
            Ok(metadata) if metadata.is_dir() => Ok(true),
            Ok(_) => {
                warn!(lib_dir = %self.lib_dir.display(), "library path is not a directory; no files listed");
                Ok(false)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(lib_dir = %self.lib_dir.display(), "library directory does not exist; no files listed");
                Ok(false)
            }
            Err(e) => Err(ClasspathError::Io(e)),
        }
    }
}

// Stable, so listing order is kept within the file group and the directory group.
fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type().is_dir().cmp(&b.file_type().is_dir())
}

fn is_listed(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    if entry.path_is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_lists_files_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        fs::create_dir_all(lib.join("sub/deeper")).unwrap();
        fs::write(lib.join("a.jar"), "a").unwrap();
        fs::write(lib.join("sub/b.jar"), "b").unwrap();
        fs::write(lib.join("sub/deeper/c.jar"), "c").unwrap();

        let files = LibScanner::new(&lib).collect_files().unwrap();
        let mut names = relative(&files, &lib);
        names.sort();

        assert_eq!(names, vec!["a.jar", "sub/b.jar", "sub/deeper/c.jar"]);
    }

    #[test]
    fn test_files_come_before_subdirectories() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path();
        fs::create_dir_all(lib.join("aaa")).unwrap();
        fs::write(lib.join("aaa/inner.jar"), "").unwrap();
        fs::write(lib.join("zzz.jar"), "").unwrap();

        let files = LibScanner::new(lib).collect_files().unwrap();

        assert_eq!(relative(&files, lib), vec!["zzz.jar", "aaa/inner.jar"]);
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("empty")).unwrap();

        let count = LibScanner::new(temp_dir.path()).visit_files(|_| {}).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_missing_directory_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = LibScanner::new(temp_dir.path().join("does-not-exist"));

        assert!(scanner.collect_files().unwrap().is_empty());
    }

    #[test]
    fn test_file_as_lib_dir_yields_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("single.jar");
        fs::write(&file, "").unwrap();

        assert!(LibScanner::new(&file).collect_files().unwrap().is_empty());
    }

    #[test]
    fn test_lib_dir_is_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        fs::create_dir(&lib).unwrap();
        fs::write(lib.join("a.jar"), "").unwrap();

        let messy = format!("{}/./lib/", temp_dir.path().display());
        let scanner = LibScanner::new(&messy);

        assert_eq!(scanner.lib_dir(), lib.as_path());
        assert_eq!(scanner.collect_files().unwrap(), vec![lib.join("a.jar")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_aborts_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let lib = temp_dir.path().join("lib");
        let locked = lib.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(lib.join("a.jar"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = LibScanner::new(&lib).collect_files();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(ClasspathError::Traversal { path, .. }) => {
                assert!(path.ends_with("locked"), "unexpected path {}", path);
            }
            other => panic!("expected traversal error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directories_are_not_followed() {
        let temp_dir = TempDir::new().unwrap();
        let outside = temp_dir.path().join("outside");
        let lib = temp_dir.path().join("lib");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&lib).unwrap();
        fs::write(outside.join("hidden.jar"), "").unwrap();
        fs::write(lib.join("real.jar"), "").unwrap();
        std::os::unix::fs::symlink(&outside, lib.join("linked")).unwrap();
        std::os::unix::fs::symlink(lib.join("real.jar"), lib.join("alias.jar")).unwrap();

        let files = LibScanner::new(&lib).collect_files().unwrap();
        let mut names = relative(&files, &lib);
        names.sort();

        assert_eq!(names, vec!["alias.jar", "real.jar"]);
    }
}
