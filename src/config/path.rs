use std::io;
use std::path::PathBuf;

/// Filesystem locations for the config store, resolved once at startup and
/// passed down instead of re-derived from the environment.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub alias_file: PathBuf,
}

impl ConfigPaths {
    /// Paths under the user's home directory (`~/.zms`).
    pub fn resolve() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::under(home.join(".zms"))
    }

    /// Paths rooted at an explicit directory.
    pub fn under(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("zms.json");
        let alias_file = config_dir.join("zms-alias");
        ConfigPaths {
            config_dir,
            config_file,
            alias_file,
        }
    }
}

/// Create the config directory and seed an empty mapping file if absent.
/// Runs once before any load, so loads never have to self-heal.
pub fn ensure_config_file(paths: &ConfigPaths) -> io::Result<()> {
    std::fs::create_dir_all(&paths.config_dir)?;
    if !paths.config_file.exists() {
        std::fs::write(&paths.config_file, "{}\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn under_derives_both_files() {
        let paths = ConfigPaths::under(PathBuf::from("/tmp/zms-test"));
        assert_eq!(paths.config_file, PathBuf::from("/tmp/zms-test/zms.json"));
        assert_eq!(paths.alias_file, PathBuf::from("/tmp/zms-test/zms-alias"));
    }

    #[test]
    fn ensure_creates_dir_and_empty_mapping() {
        let dir = tempdir().unwrap();
        let paths = ConfigPaths::under(dir.path().join(".zms"));

        ensure_config_file(&paths).unwrap();
        assert!(paths.config_dir.is_dir());
        assert_eq!(std::fs::read_to_string(&paths.config_file).unwrap(), "{}\n");
    }

    #[test]
    fn ensure_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let paths = ConfigPaths::under(dir.path().to_path_buf());
        std::fs::write(&paths.config_file, r#"{"standup":123}"#).unwrap();

        ensure_config_file(&paths).unwrap();
        assert_eq!(
            std::fs::read_to_string(&paths.config_file).unwrap(),
            r#"{"standup":123}"#
        );
    }
}
