use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{errors::Error, view, Result};

/// Typed configuration, sourced from the environment with an optional `.env`
/// file for local runs.
#[derive(Clone, Debug)]
pub struct Config {
    // Platform credentials
    pub api_id: String,
    pub api_hash: String,
    pub bot_token: String,

    // HTTP server
    pub host: String,
    pub port: u16,

    // Static status page served at `/` when present
    pub status_page: PathBuf,

    // Profile photo size used when the request does not override it
    pub default_photo_size: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let api_id = require("API_ID")?;
        let api_hash = require("API_HASH")?;
        let bot_token = require("BOT_TOKEN")?;

        let host = env_str("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = env_u16("PORT").unwrap_or(5000);

        let status_page =
            PathBuf::from(env_str("STATUS_PAGE").unwrap_or_else(|| "status.html".to_string()));
        let default_photo_size =
            env_u32("DEFAULT_PHOTO_SIZE").unwrap_or(view::DEFAULT_PHOTO_SIZE);

        Ok(Self {
            api_id,
            api_hash,
            bot_token,
            host,
            port,
            status_page,
            default_photo_size,
        })
    }
}

fn require(key: &str) -> Result<String> {
    match env_str(key).and_then(non_empty) {
        Some(v) => Ok(v),
        None => Err(Error::Config(format!(
            "{key} environment variable is required"
        ))),
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env_str(key).and_then(|s| s.trim().parse::<u32>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
