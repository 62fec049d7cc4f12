use std::{env, fmt::Display, fs, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::{PartyError, PartyResult};
use crate::model::PartyDetails;
use crate::validation::trim_optional;

pub struct ServerConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub party_file: Option<PathBuf>,
    pub storage_timeout: Duration,
}

impl ServerConfig {
    pub fn load() -> PartyResult<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> PartyResult<Self> {
        Ok(Self {
            port: try_load(&lookup, "PARTY_PORT", "3000")?,
            data_dir: try_load(&lookup, "PARTY_DATA_DIR", "data")?,
            static_dir: try_load(&lookup, "PARTY_STATIC_DIR", "public")?,
            party_file: trim_optional(lookup("PARTY_CONFIG_FILE").as_deref()).map(PathBuf::from),
            storage_timeout: Duration::from_millis(try_load(
                &lookup,
                "PARTY_STORAGE_TIMEOUT_MS",
                "5000",
            )?),
        })
    }

    /// Reads the display document, falling back to the built-in defaults
    /// when no file is configured.
    pub fn party_details(&self) -> PartyResult<PartyDetails> {
        match &self.party_file {
            Some(path) => {
                info!(path = %path.display(), "loading party details");
                let contents = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            None => Ok(PartyDetails::default()),
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> PartyResult<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        PartyError::Other(format!("Invalid {key} value '{raw}': {e}"))
    })
}
