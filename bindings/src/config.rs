//! Function configuration.
//!
//! The platform may mount a flat TOML table of string values at
//! `/config.toml`. A missing file is the same as an empty table.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

use lazy_static::lazy_static;

use crate::Error;

pub const DEFAULT_CONFIG_PATH: &str = "/config.toml";
pub const CONFIG_PATH_VAR: &str = "SUM_LAMBDA_CONFIG";

pub type Config = HashMap<String, String>;

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn parse_config(data: &str) -> Result<Config, String> {
    toml::from_str(data).map_err(|err| format!("{err}"))
}

fn parse_config_file() -> Result<Config, String> {
    let path = config_path();

    match read_to_string(&path) {
        Ok(data) => parse_config(&data).map_err(|err| format!("{}: {err}", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::trace!("No config file at {}", path.display());
            Ok(Config::new())
        }
        Err(err) => Err(format!("{}: {err}", path.display())),
    }
}

pub fn get_config_value(key: &str) -> Result<Option<String>, Error> {
    lazy_static! {
        static ref CONFIG: Result<Config, String> = parse_config_file();
    };

    match CONFIG.as_ref() {
        Ok(config) => Ok(config.get(key).cloned()),
        Err(err) => Err(Error::Config(err.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_table() {
        let config = parse_config("output_path = \"/tmp/out.json\"\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.get("output_path").unwrap(), "/tmp/out.json");
        assert_eq!(config.get("log_level").unwrap(), "debug");
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn empty_file_is_empty_config() {
        assert!(parse_config("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(parse_config("log_level = 3").is_err());
        assert!(parse_config("[section]\nkey = \"value\"").is_err());
    }
}
