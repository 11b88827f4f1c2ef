//! # textguard_encoding - UTF-8 structural guard
//!
//! Checks that byte buffers coming from other subsystems are shaped like UTF-8
//! before they are treated as text. Only lead/continuation bit patterns are
//! checked; overlong forms, surrogates and values above U+10FFFF pass.
//!
//! Modules:
//! - `encoding` for the validator and its configuration
//! - `error` for the `Result`-based surface

mod encoding;
mod error;

pub use encoding::{
    Termination, Validator, ValidatorConfig, cluster_len, is_valid_utf8, is_valid_utf8_cstr,
    is_valid_utf8_until_nul,
};
pub use error::{GuardError, GuardResult};

use std::path::Path;

/// Fail with [`GuardError::Malformed`] unless `bytes` is absent or valid UTF-8
pub fn ensure_valid_utf8(bytes: Option<&[u8]>) -> GuardResult<()> {
    Validator::default().ensure(bytes)
}

/// Check whether a file's contents are structurally valid UTF-8
pub fn check_file<P: AsRef<Path>>(path: P) -> GuardResult<bool> {
    check_file_with_config(path, ValidatorConfig::default())
}

/// Check a file's contents with custom configuration
pub fn check_file_with_config<P: AsRef<Path>>(
    path: P,
    config: ValidatorConfig,
) -> GuardResult<bool> {
    Validator::new(config).check_file(path)
}
