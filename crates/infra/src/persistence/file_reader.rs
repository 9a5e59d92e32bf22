// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use group_fold_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::FileRead`] if the file cannot be opened or is not UTF-8.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }
}
