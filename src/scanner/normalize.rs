use std::path::{Component, Path, PathBuf};

/// Lexically normalises a path without touching the filesystem.
///
/// Drops `.` segments plus duplicate and trailing separators. A `..` removes
/// the preceding normal segment, is discarded directly under the root, and is
/// kept when it leads a relative path. An empty result is `.`. Any run of
/// leading separators collapses to one, so `//x` becomes `/x` where POSIX
/// `normpath` would keep exactly two.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut prefix: Option<Component> = None;
    let mut has_root = false;
    let mut parts: Vec<Component> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) => prefix = Some(component),
            Component::RootDir => has_root = true,
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else if !has_root {
                    parts.push(component);
                }
            }
            Component::Normal(_) => parts.push(component),
        }
    }

    let mut normalized = PathBuf::new();
    if let Some(prefix) = prefix {
        normalized.push(prefix.as_os_str());
    }
    if has_root {
        normalized.push(Component::RootDir.as_os_str());
    }
    for part in parts {
        normalized.push(part.as_os_str());
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Renders a path as the string used for prefix matching and joining.
pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
