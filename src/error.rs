use std::io;
use thiserror::Error;

/// Every way a reversal run can fail.  All variants are terminal for the
/// invocation; nothing is retried and no partial output is ever written.
#[derive(Error, Debug)]
pub enum WavError {
    #[error("Failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("File too short for a WAV header: {actual} bytes (need 44)")]
    TruncatedContainer { actual: u64 },
    #[error("Missing RIFF magic at offset 0")]
    InvalidMagic,
    #[error("Declared chunk size {declared} does not match file size {file_size} minus 8")]
    SizeMismatch { declared: u32, file_size: u64 },
    #[error("RIFF chunk type is not WAVE")]
    NotWaveFormat,
    #[error("Unsupported channel count {0}: only two-channel files are accepted")]
    UnsupportedChannelLayout(u16),
    #[error("Unsupported audio format tag {0}: only integer PCM (1) is accepted")]
    UnsupportedEncoding(u16),
    #[error("Bits-per-sample field is zero")]
    InvalidSampleWidth,
    #[error("Failed to write output: {0}")]
    Write(#[source] io::Error),
}
