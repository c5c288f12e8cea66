use crate::model::{GridConfig, IconNameTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SHEET_PATH: &str = "trailtowns_icons.png";
pub const DEFAULT_OUTPUT_DIR: &str = "extracted";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_path: PathBuf,
    pub output_dir: PathBuf,
    pub names: IconNameTable,
    pub grid: GridConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_path: PathBuf::from(DEFAULT_SHEET_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            names: IconNameTable::default(),
            grid: GridConfig::default(),
        }
    }
}

impl Config {
    pub fn with_sheet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sheet_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_names(mut self, names: IconNameTable) -> Self {
        self.names = names;
        self
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let content = self
            .to_toml_string()
            .map_err(std::io::Error::other)?;
        fs::write(path, content)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_reference_layout() {
        let config = Config::default();
        assert_eq!(config.sheet_path, PathBuf::from("trailtowns_icons.png"));
        assert_eq!(config.output_dir, PathBuf::from("extracted"));
        assert_eq!(config.grid, GridConfig::new(128, 5, 5));
        assert_eq!(config.names.len(), 21);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            output_dir = "icons"

            [grid]
            icon_size = 64
            "#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("icons"));
        assert_eq!(config.grid.icon_size, 64);
        assert_eq!(config.grid.cols, 5);
        assert_eq!(config.sheet_path, PathBuf::from(DEFAULT_SHEET_PATH));
        assert_eq!(config.names, IconNameTable::default());
    }

    #[test]
    fn test_names_from_toml_array() {
        let config = Config::from_toml_str(r#"names = ["one", "two"]"#).unwrap();
        assert_eq!(config.names.len(), 2);
        assert_eq!(config.names.get(1), Some("two"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet2icons.toml");

        let config = Config::default()
            .with_output_dir("out")
            .with_grid(GridConfig::new(32, 8, 2).with_spacing(1, 2));
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "grid = 12").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
