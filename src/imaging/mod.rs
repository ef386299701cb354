//! Image re-saving: decode an image file and write it back out as JPEG.
//!
//! `resaver` owns the decode -> encode sequence and is generic over
//! [`ImageCodec`](crate::traits::ImageCodec); `rust_codec` is the production
//! codec built on the `image` crate.

pub mod resaver;
pub mod rust_codec;

pub use resaver::{resave, ImageResaver};
pub use rust_codec::{DecodedImage, RustCodec};
