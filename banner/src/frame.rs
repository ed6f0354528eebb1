/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::error::{BannerError, BannerResult};
use crate::header::BannerHeader;

/// Packs one RGBA sample into a single word, alpha in the top byte.
#[inline]
pub fn pack_pixel(rgba: [u8; 4]) -> u32 {
    ((rgba[3] as u32) << 24)
        | ((rgba[0] as u32) << 16)
        | ((rgba[1] as u32) << 8)
        | (rgba[2] as u32)
}

/// Inverse of [`pack_pixel`], back to RGBA channel order.
#[inline]
pub fn unpack_pixel(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
        (pixel >> 24) as u8,
    ]
}

/// One decoded frame: dimensions, display delay and packed pixels in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerFrame {
    pub width: u32,
    pub height: u32,
    pub delay_ms: u32,
    pub pixels: Vec<u32>,
}

impl BannerFrame {
    /// Builds a frame from a raw RGBA byte buffer, four bytes per pixel.
    pub fn from_rgba(width: u32, height: u32, delay_ms: u32, rgba: &[u8]) -> BannerResult<Self> {
        let header = BannerHeader {
            width,
            height,
            delay_ms,
        };
        if rgba.len() as u64 != header.payload_len() {
            return Err(BannerError::BufferMismatch {
                expected: header.payload_len(),
                actual: rgba.len() as u64,
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|px| pack_pixel([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            delay_ms,
            pixels,
        })
    }

    pub fn header(&self) -> BannerHeader {
        BannerHeader {
            width: self.width,
            height: self.height,
            delay_ms: self.delay_ms,
        }
    }

    /// Unpacks every pixel back into an RGBA byte buffer.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            rgba.extend_from_slice(&unpack_pixel(*pixel));
        }
        rgba
    }

    /// Serializes header and payload, one little-endian word per pixel.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.header().to_bytes())?;
        for pixel in &self.pixels {
            writer.write_all(&pixel.to_le_bytes())?;
        }
        Ok(())
    }

    /// Reads one frame from a stream positioned at the magic bytes.
    pub fn read_from<R: Read>(reader: &mut R) -> BannerResult<Self> {
        let header = BannerHeader::read_from(reader)?;
        Self::read_payload(reader, header)
    }

    /// Reads a whole frame file, rejecting files whose length does not
    /// match the header.
    pub fn read_from_file(path: impl AsRef<Path>) -> BannerResult<Self> {
        let file = File::open(path)?;
        let actual = file.metadata()?.len();
        let mut reader = BufReader::new(file);
        let header = BannerHeader::read_from(&mut reader)?;
        if actual != header.file_len() {
            return Err(BannerError::SizeMismatch {
                expected: header.file_len(),
                actual,
            });
        }
        Self::read_payload(&mut reader, header)
    }

    pub(crate) fn read_payload<R: Read>(
        reader: &mut R,
        header: BannerHeader,
    ) -> BannerResult<Self> {
        // The header's byte count is untrusted: read up to it and verify
        // the length afterwards rather than allocating it up front.
        let expected = header.payload_len();
        let mut payload = Vec::new();
        reader.by_ref().take(expected).read_to_end(&mut payload)?;
        if payload.len() as u64 != expected {
            return Err(BannerError::ShortPayload { expected });
        }
        let pixels = payload
            .chunks_exact(4)
            .map(|bytes| u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            .collect();
        Ok(Self {
            width: header.width,
            height: header.height,
            delay_ms: header.delay_ms,
            pixels,
        })
    }
}
