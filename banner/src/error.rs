/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fmt;
use std::io;

pub type BannerResult<T> = Result<T, BannerError>;

/// Everything that can go wrong while reading or building a banner frame.
#[derive(Debug)]
pub enum BannerError {
    Io(io::Error),
    /// The first four bytes were not `BANN`.
    BadMagic([u8; 4]),
    /// Fewer bytes than one header available.
    ShortHeader(usize),
    /// The pixel payload ended before `width * height` words.
    ShortPayload { expected: u64 },
    /// File length disagrees with the length implied by the header.
    SizeMismatch { expected: u64, actual: u64 },
    /// RGBA input does not hold `width * height` samples.
    BufferMismatch { expected: u64, actual: u64 },
    /// Frame is larger than the configured ceilings allow.
    OverLimit {
        width: u32,
        height: u32,
        file_len: u64,
    },
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerError::Io(e) => write!(f, "i/o error: {e}"),
            BannerError::BadMagic(magic) => {
                write!(f, "bad magic {magic:02x?}, not a banner frame file")
            }
            BannerError::ShortHeader(len) => {
                write!(f, "header needs 16 bytes, got {len}")
            }
            BannerError::ShortPayload { expected } => {
                write!(f, "pixel payload shorter than the {expected} bytes declared")
            }
            BannerError::SizeMismatch { expected, actual } => {
                write!(f, "file is {actual} bytes, header implies {expected}")
            }
            BannerError::BufferMismatch { expected, actual } => {
                write!(f, "rgba buffer is {actual} bytes, dimensions require {expected}")
            }
            BannerError::OverLimit {
                width,
                height,
                file_len,
            } => {
                write!(
                    f,
                    "frame {width}x{height} ({file_len} bytes) exceeds the configured limits"
                )
            }
        }
    }
}

impl std::error::Error for BannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BannerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BannerError {
    fn from(e: io::Error) -> Self {
        BannerError::Io(e)
    }
}
