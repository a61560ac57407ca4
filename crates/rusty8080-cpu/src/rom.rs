//! CP/M-style program image loading.
//!
//! Diagnostic programs for the 8080 ship as flat binaries assembled to run
//! at `0x0100`, the CP/M transient program area. The loader reads such an
//! image and copies it into the CPU memory at that offset.

use crate::cpu::{MEMORY_SIZE, RESET_PC};
use std::fs;
use std::io;
use std::path::Path;

/// Largest program that fits between the load address and the top of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - RESET_PC as usize;

/// Program loading error types.
#[derive(Debug, thiserror::Error)]
pub enum RomError {
    /// The image file could not be read.
    #[error("failed to read program image: {0}")]
    Io(#[from] io::Error),
    /// The image does not fit above the load address.
    #[error("program image is {0} bytes; at most 65280 bytes fit above 0x0100")]
    TooLarge(usize),
}

/// A flat program image destined for the transient program area.
#[derive(Debug, Clone)]
pub struct Program {
    data: Vec<u8>,
}

impl Program {
    /// Load a program image from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the image is larger
    /// than the space above the load address.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RomError> {
        let data = fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Wrap raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RomError::TooLarge`] if the image is larger than the space
    /// above the load address.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RomError> {
        if data.len() > MAX_PROGRAM_SIZE {
            return Err(RomError::TooLarge(data.len()));
        }
        Ok(Self { data })
    }

    /// Copy the image into `memory` at the load address.
    pub fn load_into(&self, memory: &mut [u8; MEMORY_SIZE]) {
        let start = RESET_PC as usize;
        memory[start..start + self.data.len()].copy_from_slice(&self.data);
    }

    /// Image size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
