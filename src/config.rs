use crate::error::{Result, TocError};
use crate::output::{OutputFormat, OutputOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub headings: HeadingsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Defaults for where and how the table of contents is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub alphabetical: bool,

    /// Print results to the console (default: true)
    #[serde(default = "default_true")]
    pub console: bool,

    /// Copy results to the system clipboard (default: true)
    #[serde(default = "default_true")]
    pub clipboard: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            alphabetical: false,
            console: default_true(),
            clipboard: default_true(),
            format: OutputFormat::default(),
        }
    }
}

impl From<&OutputConfig> for OutputOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            alphabetical: config.alphabetical,
            console: config.console,
            clipboard: config.clipboard,
            format: config.format,
        }
    }
}

/// Heading levels captured when `-w` is not given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingsConfig {
    /// Levels 1-6; empty means all of them
    #[serde(default)]
    pub levels: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Get the XDG-style config file path (~/.config/mdtoc/config.toml)
    /// This is preferred on macOS for CLI tools and cross-platform dotfiles
    #[cfg(target_os = "macos")]
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mdtoc").join("config.toml"))
    }

    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdtoc/config.toml
    /// - Linux: ~/.config/mdtoc/config.toml
    /// - Windows: %APPDATA%/mdtoc/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdtoc").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    /// On macOS, checks ~/.config/mdtoc first, then falls back to ~/Library/Application Support
    pub fn load() -> Self {
        #[cfg(target_os = "macos")]
        {
            if let Some(config) = Self::xdg_config_path()
                .and_then(|path| fs::read_to_string(path).ok())
                .and_then(|contents| toml::from_str(&contents).ok())
            {
                return config;
            }
        }

        Self::config_path()
            .and_then(|path| {
                fs::read_to_string(&path)
                    .ok()
                    .and_then(|contents| toml::from_str(&contents).ok())
            })
            .unwrap_or_default()
    }

    /// Load config from an explicit path. Unlike [`Config::load`], a missing or
    /// malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| TocError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|message| TocError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.console);
        assert!(config.output.clipboard);
        assert!(config.headings.levels.is_empty());
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml(
            r#"
[output]
clipboard = false
format = "json"

[headings]
levels = [2, 3]
"#,
        )
        .unwrap();

        assert!(!config.output.clipboard);
        assert!(config.output.console);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.headings.levels, vec![2, 3]);
    }

    #[test]
    fn test_output_options_from_config() {
        let config = Config::from_toml("[output]\nalphabetical = true").unwrap();
        let options = OutputOptions::from(&config.output);
        assert!(options.alphabetical);
        assert_eq!(options.format, OutputFormat::Plain);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_warn() {
        let config = Config::from_toml("[log]\nlevel = \"loud\"").unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Warn);

        let config = Config::from_toml("[log]\nlevel = \"debug\"").unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        assert!(Config::from_toml("[output]\nformat = \"yaml\"").is_err());
    }

    #[test]
    fn test_load_from_reports_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[output\nbroken").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(TocError::Config { .. })
        ));

        let dir = tempfile::TempDir::new().unwrap();
        assert!(matches!(
            Config::load_from(&dir.path().join("absent.toml")),
            Err(TocError::Io { .. })
        ));
    }

    #[test]
    fn test_load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[output]\nalphabetical = true\n").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert!(config.output.alphabetical);
    }
}
