use std::path::{Path, PathBuf};

use log::debug;

use crate::error::CookError;

pub const DEFAULT_RECIPE_EXTENSION: &str = "cook";

/// Expands command line inputs into recipe file paths.
///
/// A single directory argument becomes every `*.<extension>` file directly
/// inside it, sorted by file name. Anything else is returned unchanged.
pub fn resolve(inputs: &[PathBuf], extension: &str) -> Result<Vec<PathBuf>, CookError> {
    match inputs {
        [directory] if directory.is_dir() => list_directory(directory, extension),
        _ => Ok(inputs.to_vec()),
    }
}

fn list_directory(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, CookError> {
    let listing_failed = |source| CookError::FileListingFailed {
        path: directory.to_path_buf(),
        source,
    };

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(listing_failed)? {
        let entry = entry.map_err(listing_failed)?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(&suffix) {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(
        "found {} recipe files in {}",
        files.len(),
        directory.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_directory_is_listed_and_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["soup.cook", "bread.cook", "notes.txt", "cake.cook"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = resolve(&[dir.path().to_path_buf()], DEFAULT_RECIPE_EXTENSION).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["bread.cook", "cake.cook", "soup.cook"]);
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
    }

    #[test]
    fn test_files_are_passed_through() {
        let inputs = vec![PathBuf::from("b.cook"), PathBuf::from("a.txt")];
        assert_eq!(resolve(&inputs, DEFAULT_RECIPE_EXTENSION).unwrap(), inputs);
    }

    #[test]
    fn test_directory_among_several_inputs_is_not_expanded() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![dir.path().to_path_buf(), PathBuf::from("a.cook")];
        assert_eq!(resolve(&inputs, DEFAULT_RECIPE_EXTENSION).unwrap(), inputs);
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve(&[], DEFAULT_RECIPE_EXTENSION).unwrap().is_empty());
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.cook"), "").unwrap();
        fs::write(dir.path().join("b.recipe"), "").unwrap();

        let files = resolve(&[dir.path().to_path_buf()], "recipe").unwrap();
        assert_eq!(files, vec![dir.path().join("b.recipe")]);
    }

    #[test]
    fn test_missing_directory_fails_listing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = list_directory(&missing, DEFAULT_RECIPE_EXTENSION).unwrap_err();
        match &err {
            CookError::FileListingFailed { path, .. } => assert_eq!(path, &missing),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.exit_code(), 5);
    }
}
