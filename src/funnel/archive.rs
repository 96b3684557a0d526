use super::definition::FunnelDefinition;
use crate::error::ArchiveError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A binary snapshot of a funnel graph, for fast autosave files outside the
/// editor JSON path.
#[derive(Serialize, Deserialize, Debug)]
pub struct FunnelArchive {
    pub funnel: FunnelDefinition,
}

impl FunnelArchive {
    pub fn new(funnel: FunnelDefinition) -> Self {
        Self { funnel }
    }

    /// Serializes the archive into bincode bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArchiveError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArchiveError::Generic(format!("Serialization failed: {}", e)))
    }

    /// Saves the archive to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArchiveError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArchiveError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArchiveError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads an archive from a file.
    pub fn from_file(path: &str) -> Result<Self, ArchiveError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArchiveError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArchiveError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an archive from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArchiveError> {
        decode_from_slice(bytes, standard())
            .map(|(archive, _)| archive) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArchiveError::Generic(format!("Deserialization failed: {}", e)))
    }
}
