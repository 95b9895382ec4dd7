use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClasspathError {
    #[error("Failed to walk library directory: {path}")]
    Traversal {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create output directory: {path}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest: {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ClasspathError {
    pub fn create_dir(path: &Path, source: std::io::Error) -> Self {
        ClasspathError::CreateDir {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        ClasspathError::Write {
            path: path.display().to_string(),
            source,
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClasspathError::InvalidPath { .. } => 2,
            ClasspathError::Traversal { .. } => 3,
            ClasspathError::CreateDir { .. } | ClasspathError::Write { .. } => 4,
            ClasspathError::Io(_) => 1,
        }
    }

    fn is_permission_denied(&self) -> bool {
        let kind = match self {
            ClasspathError::Traversal { source, .. } => source.io_error().map(|e| e.kind()),
            ClasspathError::CreateDir { source, .. } | ClasspathError::Write { source, .. } => {
                Some(source.kind())
            }
            ClasspathError::Io(e) => Some(e.kind()),
            ClasspathError::InvalidPath { .. } => None,
        };
        kind == Some(std::io::ErrorKind::PermissionDenied)
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ClasspathError {
    fn user_message(&self) -> String {
        match self {
            ClasspathError::Traversal { path, source } => {
                format!("Could not read library directory {}: {}", path, source)
            }
            ClasspathError::CreateDir { path, source } => {
                format!("Could not create directory {}: {}", path, source)
            }
            ClasspathError::Write { path, source } => {
                format!("Could not write {}: {}", path, source)
            }
            ClasspathError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
            ClasspathError::Io(e) => format!("IO operation failed: {}", e),
        }
    }

    fn suggestion(&self) -> Option<String> {
        if self.is_permission_denied() {
            return Some(
                "Ensure you have the necessary read/write permissions for the library and output locations.".to_string()
            );
        }

        match self {
            ClasspathError::CreateDir { .. } => Some(
                "Check that no path component of the output file's parent is an existing regular file.".to_string()
            ),
            ClasspathError::Write { .. } => Some(
                "Check that the output path does not name an existing directory.".to_string()
            ),
            ClasspathError::InvalidPath { .. } => Some(
                "Provide a non-empty output file path.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClasspathError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_user_friendly_messages() {
        let error = ClasspathError::write(
            Path::new("out/classpath.txt"),
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        assert!(error.user_message().contains("out/classpath.txt"));
        assert!(error.user_message().contains("disk full"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_permission_denied_suggestion() {
        let error = ClasspathError::create_dir(
            Path::new("/root/nope"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.suggestion().unwrap().contains("permissions"));
    }

    #[test]
    fn test_exit_codes() {
        let invalid = ClasspathError::InvalidPath {
            path: String::new(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let write = ClasspathError::write(Path::new("x"), io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(write.exit_code(), 4);

        let io_error = ClasspathError::from(io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(io_error.exit_code(), 1);
        assert!(io_error.suggestion().is_none());
    }
}
