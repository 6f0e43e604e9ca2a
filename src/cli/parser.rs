use crate::result::{MiniCliError, Result};
use std::path::PathBuf;

pub struct CliParser;

impl CliParser {
    pub fn validate_config_path(path: &str) -> Result<PathBuf> {
        let config_path = PathBuf::from(path);

        if !config_path.exists() {
            return Err(MiniCliError::NotFound(
                format!("Config file not found: {}", path).into(),
            ));
        }

        if !config_path.is_file() {
            return Err(MiniCliError::Config("Path is not a file".into()));
        }

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_path_is_not_found() {
        let result = CliParser::validate_config_path("/no/such/minicli.toml");
        assert!(matches!(result, Err(MiniCliError::NotFound(_))));
    }

    #[test]
    fn directory_is_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let result = CliParser::validate_config_path(&tmp.path().to_string_lossy());
        assert!(matches!(result, Err(MiniCliError::Config(_))));
    }

    #[test]
    fn existing_file_passes() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let file = tmp.path().join("minicli.toml");
        std::fs::write(&file, "").expect("write");

        let validated =
            CliParser::validate_config_path(&file.to_string_lossy()).expect("validates");
        assert_eq!(validated, file);
    }
}
