use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_home_base")]
    pub home_base: String,
    #[serde(default = "default_off_duty_codes")]
    pub off_duty_codes: Vec<String>,
    #[serde(default = "default_standby_codes")]
    pub standby_codes: Vec<String>,
    #[serde(default = "default_layover_markers")]
    pub layover_markers: Vec<String>,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
}

fn default_home_base() -> String {
    "SIN".to_string()
}
fn default_off_duty_codes() -> Vec<String> {
    vec!["ATDO".into(), "AALV".into(), "OFFD".into()]
}
fn default_standby_codes() -> Vec<String> {
    vec!["SBY".into()]
}
fn default_layover_markers() -> Vec<String> {
    vec!["LO".into()]
}
fn default_format() -> ExportFormat {
    ExportFormat::Csv
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_base: default_home_base(),
            off_duty_codes: default_off_duty_codes(),
            standby_codes: default_standby_codes(),
            layover_markers: default_layover_markers(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("crewsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".crewsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("crewsheet.conf")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        if cfg.home_base.len() != 3 || !cfg.home_base.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::Config(format!(
                "home_base must be a three-letter station code, got '{}'",
                cfg.home_base
            )));
        }

        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the standard location).
    /// Returns the path written.
    pub fn init_all(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
