// crates/infra/src/persistence/roster_reader.rs
use std::path::Path;

use group_fold_domain::Person;
use group_fold_shared_kernel::{InfraResult, InfrastructureError};

use super::FileReader;

/// On-disk encodings accepted for a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    /// `.yml`/`.yaml` → YAML, anything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yml" | "yaml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Loads person rosters from JSON arrays or YAML sequences.
pub struct RosterReader;

impl RosterReader {
    /// Read the roster at `path`, choosing the decoder from its extension.
    ///
    /// # Errors
    /// Fails when the file is unreadable, malformed, or YAML support is compiled out.
    pub fn read(path: &Path) -> InfraResult<Vec<Person>> {
        let format = RosterFormat::from_path(path);
        let text = FileReader::read_to_string(path)?;
        let roster = Self::parse(&text, format).map_err(|err| match err {
            InfrastructureError::UnsupportedFormat { extension, .. } => {
                InfrastructureError::UnsupportedFormat { path: path.to_path_buf(), extension }
            }
            other => other,
        })?;
        log::info!("loaded {} records from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Decode `text` as a roster in `format`.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::SerializationError`] for malformed documents.
    pub fn parse(text: &str, format: RosterFormat) -> InfraResult<Vec<Person>> {
        match format {
            RosterFormat::Json => Ok(serde_json::from_str(text)?),
            RosterFormat::Yaml => Self::parse_yaml(text),
        }
    }

    #[cfg(feature = "yaml")]
    fn parse_yaml(text: &str) -> InfraResult<Vec<Person>> {
        Ok(serde_yaml::from_str(text)?)
    }

    #[cfg(not(feature = "yaml"))]
    fn parse_yaml(_text: &str) -> InfraResult<Vec<Person>> {
        Err(InfrastructureError::UnsupportedFormat { path: Default::default(), extension: "yaml".to_string() })
    }
}
