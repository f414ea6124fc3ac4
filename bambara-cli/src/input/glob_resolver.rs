//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            return Err(CliError::NoMatches(pattern.clone()).into());
        }
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sample.txt");
        fs::write(&file_path, "muso").unwrap();

        let files =
            resolve_patterns(&[file_path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_resolve_glob_pattern_sorts_and_dedups() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let pattern = temp_dir.path().join("*.txt").to_string_lossy().into_owned();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_unmatched_pattern_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir
            .path()
            .join("*.missing")
            .to_string_lossy()
            .into_owned();

        let result = resolve_patterns(&[pattern]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No files match pattern"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = resolve_patterns(&["***".to_string()]);
        assert!(result.is_err());
    }
}
