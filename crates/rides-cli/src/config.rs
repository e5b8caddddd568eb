use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RidesConfig {
    #[serde(default)]
    pub rides: RidesSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RidesSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<RidesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("rides"));
        }
    }
    Ok(home_dir()?.join(".config").join("rides"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[rides]\npath = \"/data/rides.csv\"\n\n[ui]\nascii = true\ncolor = false\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.rides.path.as_deref(), Some("/data/rides.csv"));
        assert!(config.ui.ascii);
        assert!(!config.ui.color);
    }

    #[test]
    fn test_sections_are_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.rides.path.is_none());
        assert!(!config.ui.ascii);
        assert!(config.ui.color);
    }

    #[test]
    fn test_bad_toml_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[rides\npath = 1").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
