use crate::utils::error::{ConvertError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The path must exist and be a directory. An empty path never is.
pub fn validate_directory(path: &str) -> Result<()> {
    if path.is_empty() || !Path::new(path).is_dir() {
        return Err(ConvertError::DirectoryNotFound {
            path: path.to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_validate_directory() {
        let dir = TempDir::new().unwrap();
        assert!(validate_directory(dir.path().to_str().unwrap()).is_ok());

        let missing = dir.path().join("missing");
        assert!(matches!(
            validate_directory(missing.to_str().unwrap()),
            Err(ConvertError::DirectoryNotFound { .. })
        ));

        assert!(matches!(
            validate_directory(""),
            Err(ConvertError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_regular_file_is_not_a_directory() {
        let file = NamedTempFile::new().unwrap();
        assert!(validate_directory(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_strings() {
        assert!(validate_non_empty_string("tool", "inkscape").is_ok());
        assert!(validate_non_empty_string("tool", "   ").is_err());
    }
}
