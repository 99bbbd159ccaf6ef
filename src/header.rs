//! The fixed 44-byte canonical WAV header.
//!
//! Layout (all integers little-endian):
//!
//! | Offset | Width | Field              |
//! |-------:|------:|--------------------|
//! |      0 |     4 | "RIFF" magic       |
//! |      4 |     4 | chunk size (file size − 8) |
//! |      8 |     4 | "WAVE" tag         |
//! |     12 |     4 | "fmt " chunk id    |
//! |     16 |     4 | fmt chunk size     |
//! |     20 |     2 | audio format tag   |
//! |     22 |     2 | channel count      |
//! |     24 |     4 | sample rate        |
//! |     28 |     4 | byte rate          |
//! |     32 |     2 | block align        |
//! |     34 |     2 | bits per sample    |
//! |     36 |     4 | "data" chunk id    |
//! |     40 |     4 | data chunk size    |
//!
//! Only this fixed layout is understood; there is no chunk walking.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::error::WavError;

pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_TAG: &[u8; 4] = b"WAVE";
/// Total size of the fixed header, in bytes.
pub const HEADER_SIZE: usize = 44;
/// Audio format tag for uncompressed integer PCM.
pub const PCM_FORMAT_TAG: u16 = 1;
/// The only channel layout this tool accepts.
pub const SUPPORTED_CHANNELS: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    pub riff: [u8; 4],
    pub chunk_size: u32,
    pub wave: [u8; 4],
    pub fmt_id: [u8; 4],
    pub fmt_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_id: [u8; 4],
    pub data_size: u32,
}

impl WavHeader {
    pub fn read<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut riff = [0u8; 4];
        reader.read_exact(&mut riff)?;
        let chunk_size = reader.read_u32::<LittleEndian>()?;
        let mut wave = [0u8; 4];
        reader.read_exact(&mut wave)?;
        let mut fmt_id = [0u8; 4];
        reader.read_exact(&mut fmt_id)?;
        let fmt_size = reader.read_u32::<LittleEndian>()?;
        let audio_format = reader.read_u16::<LittleEndian>()?;
        let channels = reader.read_u16::<LittleEndian>()?;
        let sample_rate = reader.read_u32::<LittleEndian>()?;
        let byte_rate = reader.read_u32::<LittleEndian>()?;
        let block_align = reader.read_u16::<LittleEndian>()?;
        let bits_per_sample = reader.read_u16::<LittleEndian>()?;
        let mut data_id = [0u8; 4];
        reader.read_exact(&mut data_id)?;
        let data_size = reader.read_u32::<LittleEndian>()?;
        Ok(Self {
            riff,
            chunk_size,
            wave,
            fmt_id,
            fmt_size,
            audio_format,
            channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_id,
            data_size,
        })
    }

    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.riff)?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(&self.wave)?;
        writer.write_all(&self.fmt_id)?;
        writer.write_u32::<LittleEndian>(self.fmt_size)?;
        writer.write_u16::<LittleEndian>(self.audio_format)?;
        writer.write_u16::<LittleEndian>(self.channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;
        writer.write_all(&self.data_id)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        Ok(())
    }

    /// Check the header against the accepted profile.
    ///
    /// Checks run in a fixed order and stop at the first violation:
    /// RIFF magic, declared chunk size, WAVE tag, channel count, format tag.
    /// The `fmt `/`data` sub-chunk ids and the fmt chunk size are not part
    /// of the profile and are never inspected.
    pub fn validate(&self, file_size: u64) -> Result<(), WavError> {
        if &self.riff != RIFF_MAGIC {
            return Err(WavError::InvalidMagic);
        }
        if u64::from(self.chunk_size) + 8 != file_size {
            return Err(WavError::SizeMismatch {
                declared: self.chunk_size,
                file_size,
            });
        }
        if &self.wave != WAVE_TAG {
            return Err(WavError::NotWaveFormat);
        }
        if self.channels != SUPPORTED_CHANNELS {
            return Err(WavError::UnsupportedChannelLayout(self.channels));
        }
        if self.audio_format != PCM_FORMAT_TAG {
            return Err(WavError::UnsupportedEncoding(self.audio_format));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> WavHeader {
        WavHeader {
            riff: *RIFF_MAGIC,
            chunk_size: 36 + 8,
            wave: *WAVE_TAG,
            fmt_id: *b"fmt ",
            fmt_size: 16,
            audio_format: PCM_FORMAT_TAG,
            channels: 2,
            sample_rate: 44_100,
            byte_rate: 176_400,
            block_align: 4,
            bits_per_sample: 16,
            data_id: *b"data",
            data_size: 8,
        }
    }

    #[test]
    fn decode_canonical_layout() {
        let mut bytes = Vec::new();
        sample_header().write(&mut bytes).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes(bytes[40..44].try_into().unwrap()), 8);

        let decoded = WavHeader::read(&bytes[..]).unwrap();
        assert_eq!(decoded, sample_header());
    }

    #[test]
    fn validate_accepts_profile() {
        assert!(sample_header().validate(52).is_ok());
    }

    #[test]
    fn validate_reports_earliest_violation() {
        // Bad magic and bad channel count: the magic check comes first.
        let mut h = sample_header();
        h.riff = *b"RIFX";
        h.channels = 1;
        assert!(matches!(h.validate(52), Err(WavError::InvalidMagic)));
    }

    #[test]
    fn validate_size_before_wave_tag() {
        let mut h = sample_header();
        h.wave = *b"AIFF";
        assert!(matches!(
            h.validate(53),
            Err(WavError::SizeMismatch { declared: 44, file_size: 53 })
        ));
        assert!(matches!(h.validate(52), Err(WavError::NotWaveFormat)));
    }

    #[test]
    fn validate_rejects_mono() {
        let mut h = sample_header();
        h.channels = 1;
        assert!(matches!(
            h.validate(52),
            Err(WavError::UnsupportedChannelLayout(1))
        ));
    }

    #[test]
    fn validate_rejects_non_pcm() {
        let mut h = sample_header();
        h.audio_format = 3; // IEEE float
        assert!(matches!(
            h.validate(52),
            Err(WavError::UnsupportedEncoding(3))
        ));
    }
}
