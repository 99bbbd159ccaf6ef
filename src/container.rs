//! [`WavContainer`] — one owned byte buffer holding the whole file.
//!
//! The header struct is decoded once at parse time; the data region is a
//! borrowed slice at a fixed offset into the same buffer.  No second
//! allocation is made for either region, and the total size lives on the
//! container as a plain value.

use std::io::Write;

use crate::error::WavError;
use crate::header::{WavHeader, HEADER_SIZE};
use crate::reverse::reverse_frames;

#[derive(Debug)]
pub struct WavContainer {
    header: WavHeader,
    buf: Vec<u8>,
}

impl WavContainer {
    /// Decode a whole-file buffer.  The buffer must hold at least the
    /// 44-byte header; everything after it is the data region.
    pub fn parse(buf: Vec<u8>) -> Result<Self, WavError> {
        if buf.len() < HEADER_SIZE {
            return Err(WavError::TruncatedContainer {
                actual: buf.len() as u64,
            });
        }
        let header = WavHeader::read(&buf[..HEADER_SIZE]).map_err(WavError::Read)?;
        Ok(Self { header, buf })
    }

    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    pub fn file_size(&self) -> u64 {
        self.buf.len() as u64
    }

    pub fn header_bytes(&self) -> &[u8] {
        &self.buf[..HEADER_SIZE]
    }

    pub fn data(&self) -> &[u8] {
        &self.buf[HEADER_SIZE..]
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buf[HEADER_SIZE..]
    }

    /// The whole container, header first, as it would appear on disk.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Check the decoded header against the accepted profile.
    pub fn validate(&self) -> Result<(), WavError> {
        self.header.validate(self.file_size())
    }

    /// Reverse the frame order of the data region in place.
    ///
    /// The frame width is the header's bits-per-sample field taken directly
    /// as a byte count.
    pub fn reverse(&mut self) -> Result<(), WavError> {
        let unit = self.header.bits_per_sample as usize;
        reverse_frames(&mut self.buf[HEADER_SIZE..], unit)
    }

    /// Serialize the container to `writer` as one contiguous write.
    /// Carries no semantics of its own beyond propagating write failures.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), WavError> {
        writer.write_all(&self.buf).map_err(WavError::Write)
    }
}
