use std::{collections::HashMap, fs, path::Path, str::FromStr};

use log::LevelFilter;

use crate::error::DicomError;
use crate::CommonResult;

pub const DEFAULT_CONFIG_FILE: &str = "SysCfg.ini";

pub const KEY_LOG_LEVEL: &str = "LogLevel";
pub const KEY_TAG_MAPPING_FILE: &str = "TagMappingFile";
pub const KEY_OUTPUT_IMAGE: &str = "OutputImage";

/// `key=value` settings. Lines starting with `;` are comments; a line that
/// does not split into exactly two parts on `=` is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    items: HashMap<String, String>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> CommonResult<Config> {
        let path = path.as_ref();

        let text = fs::read_to_string(path)
            .map_err(|error| DicomError::Config(format!("{}: {}", path.display(), error)))?;

        let config = Config::parse(&text);

        log::debug!("{} configuration item(s) loaded", config.items.len());

        Ok(config)
    }

    pub fn parse(text: &str) -> Config {
        let mut items = HashMap::new();

        for line in text.lines() {
            let line = line.trim_end_matches(|c| c == '\r' || c == '\n');

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let parts = line.split('=').collect::<Vec<&str>>();
            if let [key, value] = parts.as_slice() {
                items.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Config { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn log_level(&self) -> CommonResult<Option<LevelFilter>> {
        match self.get(KEY_LOG_LEVEL) {
            None => Ok(None),
            Some(text) => LevelFilter::from_str(text)
                .map(Some)
                .map_err(|_| DicomError::Config(format!("invalid {}: {}", KEY_LOG_LEVEL, text))),
        }
    }
}
