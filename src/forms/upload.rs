//! Image Upload Validation

use crate::error::DraftError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// An image picked for analysis, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Check a file's declared type and size before reading it.
    pub fn check(mime: &str, size: usize) -> Result<(), DraftError> {
        if !mime.starts_with("image/") {
            return Err(DraftError::NotAnImage);
        }
        if size > MAX_IMAGE_BYTES {
            return Err(DraftError::ImageTooLarge { max_mb: MAX_IMAGE_BYTES / (1024 * 1024) });
        }
        Ok(())
    }

    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DraftError> {
        let mime = mime.into();
        Self::check(&mime, bytes.len())?;
        Ok(Self { file_name: file_name.into(), mime, bytes })
    }
}

/// Tags each pick so a file read that finishes after a newer pick (or a
/// removal) is dropped instead of analyzed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PickGeneration(u64);

impl PickGeneration {
    /// Start a new pick; earlier tags stop being admitted.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn admits(&self, tag: u64) -> bool {
        self.0 == tag
    }
}
