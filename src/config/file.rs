//! Configuration file loading.

use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    read_config(path)
}

/// Load configuration from the default platform-specific path.
///
/// Returns default config if no config file exists.
pub fn load_default_config() -> Result<Config> {
    super::config_file_path().map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path))
}

/// Load and validate configuration.
///
/// An explicit path must exist; without one the platform default is used
/// when present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => read_config(path)?,
        None => load_default_config()?,
    };

    validate_config(&config)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path);
        assert!(config.is_ok());
        assert_eq!(config.ok().unwrap(), Config::default());
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let path = Path::new("/nonexistent/path/config.toml");
        let result = load_config(Some(path));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[ffmpeg]
path = "/opt/ffmpeg/bin/ffmpeg"

[encoding]
preset = "slow"
crf = 18
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(
            config.ffmpeg.path,
            std::path::PathBuf::from("/opt/ffmpeg/bin/ffmpeg")
        );
        assert_eq!(config.encoding.preset, "slow");
        assert_eq!(config.encoding.crf, 18);
        // Unset keys keep their defaults
        assert_eq!(config.encoding.audio_format, "mp3");
        assert_eq!(config.encoding.audio_quality, 2);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(matches!(config, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[encoding]\nbitrate = 128").unwrap();

        assert!(matches!(
            load_config_file(file.path()),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_load_validates_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[encoding]\ncrf = 80").unwrap();

        assert!(matches!(
            load_config(Some(file.path())),
            Err(Error::ConfigValidation { .. })
        ));
    }
}
