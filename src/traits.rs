//! This module defines shared traits used across the crate.

use std::path::Path;

use crate::config::OutputFormat;
use crate::error::NativeError;
use crate::types::{Dimensions, Quality};

/// What the resaver needs from an image library.
///
/// `decode` hands back an owned `Handle`; the resaver borrows it for `encode` and
/// drops it when the call returns, whichever way the call returns.
pub trait ImageCodec: Sync {
    /// The in-memory image produced by `decode`.
    type Handle;

    /// Loads and decodes the image at `path`.
    fn decode(&self, path: &Path) -> Result<Self::Handle, NativeError>;

    /// Reports the pixel size of a decoded image.
    fn dimensions(&self, handle: &Self::Handle) -> Dimensions;

    /// Serializes `handle` to `path` in `format` at `quality`, replacing any existing file.
    fn encode(
        &self,
        handle: &Self::Handle,
        path: &Path,
        format: OutputFormat,
        quality: Quality,
    ) -> Result<(), NativeError>;
}
