//! Mediarelay Transcoder Library
//!
//! The `Transcoder` trait is the single capability the dispatcher needs from a
//! managed transcoding service: submit one job. `MediaConvertClient` implements
//! it against AWS Elemental MediaConvert.

#[cfg(feature = "mediaconvert")]
pub mod mediaconvert;
pub mod traits;
pub mod wire;

#[cfg(feature = "mediaconvert")]
pub use mediaconvert::MediaConvertClient;
pub use traits::{JobHandle, Transcoder, TranscoderError, TranscoderResult};
