// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DsepError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = DsepError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.query))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_matrix_path(cfg)?;
    Ok(())
}

fn validate_matrix_path(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.matrix.as_os_str().is_empty() {
        return Err(DsepError::ConfigError(
            "[config].matrix must name a matrix file (got an empty path)".to_string(),
        ));
    }
    Ok(())
}
