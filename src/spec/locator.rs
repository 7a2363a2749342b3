//! Specification file discovery
//!
//! Walks up from a starting directory looking for a co-located
//! specification file.

use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// File names checked in every directory, in priority order
pub const CANDIDATE_FILES: [&str; 3] = ["swagger.json", "swagger.yml", "swagger.yaml"];

/// Number of directories examined: the starting one plus its ancestors
pub const MAX_SEARCH_DEPTH: usize = 5;

/// Search `start` and its ancestors for a specification file
pub fn locate(start: &Path) -> Result<PathBuf> {
    let Ok(start) = start.canonicalize() else {
        return Err(Error::NotFound);
    };

    start
        .ancestors()
        .take(MAX_SEARCH_DEPTH)
        .find_map(find_in_dir)
        .ok_or(Error::NotFound)
}

/// Search from the working directory, then from the executable's directory
pub fn locate_default() -> Result<PathBuf> {
    default_search_roots()
        .iter()
        .find_map(|root| locate(root).ok())
        .ok_or(Error::NotFound)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CANDIDATE_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::with_capacity(2);
    if let Ok(cwd) = env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn nested(root: &TempDir, depth: usize) -> PathBuf {
        let mut dir = root.path().to_path_buf();
        for i in 0..depth {
            dir = dir.join(format!("level{i}"));
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_finds_file_in_start_dir() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("swagger.yml"), "swagger: '2.0'").unwrap();

        let found = locate(root.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "swagger.yml");
    }

    #[test]
    fn test_priority_order() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("swagger.yaml"), "a: 1").unwrap();
        fs::write(root.path().join("swagger.json"), "{}").unwrap();
        fs::write(root.path().join("swagger.yml"), "a: 1").unwrap();

        let found = locate(root.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "swagger.json");
    }

    #[test]
    fn test_ascends_to_parent() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("swagger.yaml"), "a: 1").unwrap();
        let start = nested(&root, MAX_SEARCH_DEPTH - 1);

        let found = locate(&start).unwrap();
        assert_eq!(found, root.path().canonicalize().unwrap().join("swagger.yaml"));
    }

    #[test]
    fn test_stops_after_max_depth() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("swagger.json"), "{}").unwrap();
        let start = nested(&root, MAX_SEARCH_DEPTH);

        assert!(matches!(locate(&start), Err(Error::NotFound)));
    }

    #[test]
    fn test_nearest_file_wins() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("swagger.json"), "{}").unwrap();
        let start = nested(&root, 2);
        fs::write(start.join("swagger.yaml"), "a: 1").unwrap();

        let found = locate(&start).unwrap();
        assert_eq!(found, start.canonicalize().unwrap().join("swagger.yaml"));
    }

    #[test]
    fn test_directory_named_like_candidate_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("swagger.json")).unwrap();
        fs::write(root.path().join("swagger.yml"), "a: 1").unwrap();

        let found = locate(root.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), "swagger.yml");
    }

    #[test]
    fn test_missing_start_dir() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");
        assert!(matches!(locate(&missing), Err(Error::NotFound)));
    }
}
