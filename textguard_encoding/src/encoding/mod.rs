use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{GuardError, GuardResult};

pub mod utf8;

pub use utf8::{cluster_len, is_valid_utf8, is_valid_utf8_cstr, is_valid_utf8_until_nul};

/// Where a validated buffer ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// The slice length is the only terminator
    #[default]
    Length,
    /// The first `0x00` at a cluster boundary, or the slice end, whichever comes first
    Nul,
}

/// Configuration for validation and the file/reader helpers
#[derive(Debug, Clone, Copy)]
pub struct ValidatorConfig {
    pub termination: Termination,
    /// Largest input the reader/file helpers will buffer (default: 100MB)
    pub max_file_size: u64,
    /// Chunk size for streaming reads (default: 8MB)
    pub chunk_size: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            termination: Termination::Length,
            max_file_size: 100 * 1024 * 1024,
            chunk_size: 8 * 1024 * 1024,
        }
    }
}

/// Structural UTF-8 validator bound to a [`ValidatorConfig`]
///
/// Holds no mutable state; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Validator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Returns `true` if `bytes` is absent or structurally valid UTF-8
    pub fn validate(&self, bytes: Option<&[u8]>) -> bool {
        match self.config.termination {
            Termination::Length => is_valid_utf8(bytes),
            Termination::Nul => is_valid_utf8_until_nul(bytes),
        }
    }

    /// [`Validator::validate`] as a `Result`, for callers that propagate with `?`
    pub fn ensure(&self, bytes: Option<&[u8]>) -> GuardResult<()> {
        if self.validate(bytes) {
            Ok(())
        } else {
            Err(GuardError::Malformed)
        }
    }

    /// Read `reader` to the end and validate the whole buffer
    ///
    /// Reading stops with [`GuardError::FileTooLarge`] as soon as more than
    /// `max_file_size` bytes have been seen.
    pub fn check_reader<R: Read>(&self, mut reader: R) -> GuardResult<bool> {
        let content = self.read_bounded(&mut reader, None)?;
        Ok(self.validate(Some(content.as_slice())))
    }

    /// Validate the contents of the file at `path`
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> GuardResult<bool> {
        let path = path.as_ref();
        let size = path.metadata()?.len();
        if size > self.config.max_file_size {
            return Err(GuardError::FileTooLarge {
                size,
                limit: self.config.max_file_size,
            });
        }

        let mut file = File::open(path)?;
        let content = self.read_bounded(&mut file, Some(size))?;
        let valid = self.validate(Some(content.as_slice()));
        debug!(path = %path.display(), bytes = content.len(), valid, "checked file");
        Ok(valid)
    }

    // Known sizes cap the buffer; the spare byte covers a file that grew after stat.
    fn read_buffer_len(&self, size_hint: Option<u64>) -> usize {
        let chunk = self.config.chunk_size.max(1);
        match size_hint {
            Some(size) => usize::try_from(size.saturating_add(1))
                .map_or(chunk, |n| chunk.min(n)),
            None => chunk,
        }
    }

    fn read_bounded<R: Read>(
        &self,
        reader: &mut R,
        size_hint: Option<u64>,
    ) -> GuardResult<Vec<u8>> {
        let limit = self.config.max_file_size;
        let mut content = Vec::new();
        let mut buffer = vec![0u8; self.read_buffer_len(size_hint)];

        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            let size = (content.len() + bytes_read) as u64;
            if size > limit {
                return Err(GuardError::FileTooLarge { size, limit });
            }
            content.extend_from_slice(&buffer[..bytes_read]);
        }

        Ok(content)
    }
}
