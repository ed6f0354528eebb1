/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::Read;

use crate::error::{BannerError, BannerResult};

/// First four bytes of every banner frame file.
pub const MAGIC: [u8; 4] = *b"BANN";

/// Fixed-size header at the start of a banner frame file.
///
/// Layout (all integers little-endian):
///
/// | offset | size | field    |
/// |--------|------|----------|
/// | 0      | 4    | `BANN`   |
/// | 4      | 4    | width    |
/// | 8      | 4    | height   |
/// | 12     | 4    | delay_ms |
///
/// The pixel payload follows immediately, `width * height` packed words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerHeader {
    pub width: u32,
    pub height: u32,
    /// How long the frame stays on screen, in milliseconds.
    pub delay_ms: u32,
}

impl BannerHeader {
    pub const SIZE: usize = 16;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&MAGIC);
        bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.delay_ms.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> BannerResult<Self> {
        if bytes.len() < Self::SIZE {
            return Err(BannerError::ShortHeader(bytes.len()));
        }
        let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
        if magic != MAGIC {
            return Err(BannerError::BadMagic(magic));
        }
        Ok(Self {
            width: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            height: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            delay_ms: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        })
    }

    pub fn read_from<R: Read>(reader: &mut R) -> BannerResult<Self> {
        let mut bytes = [0u8; Self::SIZE];
        reader.read_exact(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Payload size in bytes, excluding the header. Saturates at
    /// `u64::MAX` for dimension pairs too large to exist on disk.
    pub fn payload_len(&self) -> u64 {
        self.pixel_count().saturating_mul(4)
    }

    /// Total on-disk size of a well-formed file with this header.
    pub fn file_len(&self) -> u64 {
        self.payload_len().saturating_add(Self::SIZE as u64)
    }
}
