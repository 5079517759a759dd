use crate::error::{BookError, Result};
use crate::paths::{normalize_ext, DEFAULT_NOTE_EXT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BUFFER_SIZE: usize = 4096;

pub const CONFIG_KEYS: &[&str] = &["note-ext", "host", "port", "buffer-size"];

/// Configuration for bsdbook, stored in `<root>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File extension of note files (e.g. ".bdsb", ".md")
    #[serde(default = "default_note_ext")]
    pub note_ext: String,

    /// Address the HTTP gateway binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on bytes read from a client before the request line is parsed
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_note_ext() -> String {
    DEFAULT_NOTE_EXT.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            note_ext: default_note_ext(),
            host: default_host(),
            port: default_port(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory. The directory must already exist.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "note-ext" => Some(self.note_ext.clone()),
            "host" => Some(self.host.clone()),
            "port" => Some(self.port.to_string()),
            "buffer-size" => Some(self.buffer_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "note-ext" => {
                let ext = normalize_ext(value.trim());
                if ext.len() < 2 || ext.contains(['/', '\\']) {
                    return Err(BookError::Api(format!("Invalid note extension: {}", value)));
                }
                self.note_ext = ext;
            }
            "host" => {
                if value.trim().is_empty() {
                    return Err(BookError::Api("Host cannot be empty".to_string()));
                }
                self.host = value.trim().to_string();
            }
            "port" => {
                self.port = value
                    .trim()
                    .parse()
                    .map_err(|_| BookError::Api(format!("Invalid port: {}", value)))?;
            }
            "buffer-size" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| BookError::Api(format!("Invalid buffer size: {}", value)))?;
                if size == 0 {
                    return Err(BookError::Api("Buffer size must be positive".to_string()));
                }
                self.buffer_size = size;
            }
            other => return Err(BookError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
