// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
///
/// With `required = true` (the user named the file explicitly) a missing
/// file is an error instead. Returns the config plus the directory relative
/// paths inside it should be resolved against, if a file was read.
pub fn load_or_default(
    fs: &dyn FileSystem,
    path: &Path,
    required: bool,
) -> Result<(ConfigFile, Option<PathBuf>)> {
    if !required && !fs.is_file(path) {
        debug!(path = %path.display(), "no config file, using built-in defaults");
        let cfg = ConfigFile::try_from(RawConfigFile::default())?;
        return Ok((cfg, None));
    }

    let cfg = load_and_validate(fs, path)?;
    debug!(path = %path.display(), queries = cfg.query.len(), "loaded config");
    Ok((cfg, Some(config_root_dir(path))))
}

/// Default config location: `Dsep.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dsep.toml")
}

/// Directory a config file's relative paths are anchored at.
///
/// A bare filename like `Dsep.toml` has an empty parent; that maps to ".".
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::QueryConfig;
    use crate::errors::DsepError;
    use crate::fs::mock::MockFileSystem;
    use crate::types::IndexBase;

    #[test]
    fn missing_default_config_falls_back_to_defaults() {
        let fs = MockFileSystem::new();
        let (cfg, root) = load_or_default(&fs, &default_config_path(), false).unwrap();
        assert!(root.is_none());
        assert_eq!(cfg.query.len(), 2);
        assert_eq!(cfg.config.index_base, IndexBase::Auto);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let fs = MockFileSystem::new();
        assert!(load_or_default(&fs, Path::new("conf/Dsep.toml"), true).is_err());
    }

    #[test]
    fn parses_both_query_forms() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "conf/Dsep.toml",
            r#"
query = [
    { start = 1, end = 3, observed = [2] },
    [2, 4],
    [7],
]

[config]
matrix = "graphs/dag.txt"
index_base = "zero"
check_acyclic = true
"#,
        );

        let (cfg, root) = load_or_default(&fs, Path::new("conf/Dsep.toml"), false).unwrap();
        assert_eq!(root, Some(PathBuf::from("conf")));
        assert_eq!(cfg.config.matrix, PathBuf::from("graphs/dag.txt"));
        assert_eq!(cfg.config.index_base, IndexBase::Zero);
        assert!(cfg.config.check_acyclic);
        assert!(!cfg.config.parallel);
        assert_eq!(
            cfg.query,
            vec![
                QueryConfig::Fields {
                    start: 1,
                    end: 3,
                    observed: vec![2]
                },
                QueryConfig::Values(vec![2, 4]),
                QueryConfig::Values(vec![7]),
            ]
        );
    }

    #[test]
    fn table_array_queries_and_missing_query_key() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "a.toml",
            "[[query]]\nstart = 1\nend = 2\n\n[[query]]\nstart = 3\nend = 1\nobserved = [2]\n",
        );
        fs.add_file("b.toml", "[config]\nparallel = true\n");

        let a = load_and_validate(&fs, "a.toml").unwrap();
        assert_eq!(a.query.len(), 2);
        assert_eq!(
            a.query[0],
            QueryConfig::Fields {
                start: 1,
                end: 2,
                observed: vec![]
            }
        );

        let b = load_and_validate(&fs, "b.toml").unwrap();
        assert!(b.config.parallel);
        assert_eq!(b.query.len(), 2);
    }

    #[test]
    fn unknown_keys_are_toml_errors() {
        let fs = MockFileSystem::new();
        fs.add_file("bad.toml", "[config]\nmatrixx = \"dag.txt\"\n");
        assert!(matches!(
            load_and_validate(&fs, "bad.toml"),
            Err(DsepError::TomlError(_))
        ));
    }
}
