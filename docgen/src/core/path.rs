//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: `..` is resolved against the
//! preceding component and symlinks are not followed.

use std::path::{Component, Path, PathBuf};

/// Website directory (under the project root) that serves generated API docs.
pub const API_DOCS_DIR: [&str; 3] = ["website", "static", "api"];

/// Resolve `.` and `..` components without consulting the filesystem.
///
/// `..` directly under the root is dropped; leading `..` in a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Join `segments` onto `root` and normalize.
pub fn join_segments<S: AsRef<str>>(root: &Path, segments: &[S]) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment.as_ref());
    }
    normalize(&path)
}

/// Directory that receives the docs for `output_paths`.
pub fn api_docs_dir<S: AsRef<str>>(project_root: &Path, output_paths: &[S]) -> PathBuf {
    join_segments(&join_segments(project_root, &API_DOCS_DIR), output_paths)
}

/// Path of `to` expressed relative to `from`.
///
/// Both inputs are normalized first. Identical paths yield `.`.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(left, right)| left == right)
        .count();

    let mut relative = PathBuf::new();
    for _ in &from_parts[common..] {
        relative.push("..");
    }
    for part in &to_parts[common..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        return PathBuf::from(".");
    }
    relative
}
