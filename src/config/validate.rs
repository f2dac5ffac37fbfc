//! Configuration validation.

use crate::config::{Config, EncodingConfig};
use crate::constants::encoding;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.ffmpeg.path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            message: "ffmpeg path must not be empty".to_string(),
        });
    }

    validate_encoding(&config.encoding)
}

/// Validate encoding settings.
fn validate_encoding(settings: &EncodingConfig) -> Result<()> {
    if !(encoding::AUDIO_QUALITY_MIN..=encoding::AUDIO_QUALITY_MAX)
        .contains(&settings.audio_quality)
    {
        return Err(Error::ConfigValidation {
            message: format!(
                "audio_quality must be between {} and {}, got {}",
                encoding::AUDIO_QUALITY_MIN,
                encoding::AUDIO_QUALITY_MAX,
                settings.audio_quality
            ),
        });
    }

    if !(encoding::CRF_MIN..=encoding::CRF_MAX).contains(&settings.crf) {
        return Err(Error::ConfigValidation {
            message: format!(
                "crf must be between {} and {}, got {}",
                encoding::CRF_MIN,
                encoding::CRF_MAX,
                settings.crf
            ),
        });
    }

    if !encoding::PRESETS.contains(&settings.preset.as_str()) {
        return Err(Error::ConfigValidation {
            message: format!(
                "unknown preset '{}', expected one of: {}",
                settings.preset,
                encoding::PRESETS.join(", ")
            ),
        });
    }

    if !is_bare_extension(&settings.audio_format) {
        return Err(Error::ConfigValidation {
            message: format!(
                "audio_format must be a bare file extension, got '{}'",
                settings.audio_format
            ),
        });
    }

    Ok(())
}

/// Whether `ext` can be appended to a file name as `.ext`.
pub(crate) fn is_bare_extension(ext: &str) -> bool {
    !ext.is_empty()
        && ext
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
