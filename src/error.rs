use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading recipes and building shopping lists
#[derive(Error, Debug)]
pub enum CookError {
    /// A config file exists (or was named explicitly) but could not be read
    #[error("Failed to read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file was read but its contents make no sense.
    /// Loaders recover from this one and continue without the config.
    #[error("Failed to parse config file {path}: {reason}")]
    ConfigUnparsable { path: PathBuf, reason: String },

    /// Failed to list recipe files in a directory
    #[error("Failed to list recipe files in {path}: {source}")]
    FileListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a recipe file as UTF-8 text
    #[error("Failed to read recipe {path}: {reason}")]
    RecipeUnreadable { path: PathBuf, reason: String },

    /// The recipe parser rejected a recipe file
    #[error("Failed to parse recipe {path}: {cause}")]
    RecipeUnparsable {
        path: PathBuf,
        #[source]
        cause: crate::parser::ParseError,
    },

    /// Rendered document could not be encoded
    #[error("Failed to encode output: {0}")]
    OutputEncodingFailed(String),

    /// Output stream rejected the rendered document
    #[error("Failed to write output: {0}")]
    OutputWriteFailed(#[from] std::io::Error),

    /// Tool settings error
    #[error("Settings error: {0}")]
    SettingsError(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// A concurrent recipe load did not finish
    #[error("Recipe loading task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl CookError {
    /// Process exit code for this kind of failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CookError::BuilderError(_) => 2,
            CookError::ConfigUnreadable { .. } => 3,
            CookError::ConfigUnparsable { .. } => 4,
            CookError::FileListingFailed { .. } => 5,
            CookError::RecipeUnreadable { .. } => 6,
            CookError::RecipeUnparsable { .. } => 7,
            CookError::OutputEncodingFailed(_) => 8,
            CookError::OutputWriteFailed(_) => 9,
            CookError::SettingsError(_) => 10,
            CookError::TaskError(_) => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = vec![
            CookError::BuilderError("x".to_string()),
            CookError::ConfigUnreadable {
                path: PathBuf::from("aisle.conf"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
            CookError::ConfigUnparsable {
                path: PathBuf::from("aisle.conf"),
                reason: "bad".to_string(),
            },
            CookError::FileListingFailed {
                path: PathBuf::from("recipes"),
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            },
            CookError::RecipeUnreadable {
                path: PathBuf::from("a.cook"),
                reason: "gone".to_string(),
            },
            CookError::OutputEncodingFailed("bad".to_string()),
            CookError::OutputWriteFailed(io::Error::new(io::ErrorKind::BrokenPipe, "pipe")),
        ];

        let codes: HashSet<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_messages_name_the_path() {
        let error = CookError::RecipeUnreadable {
            path: PathBuf::from("recipes/pancakes.cook"),
            reason: "stream did not contain valid UTF-8".to_string(),
        };
        assert!(error.to_string().contains("recipes/pancakes.cook"));
    }
}
