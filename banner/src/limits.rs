/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use crate::error::{BannerError, BannerResult};
use crate::header::BannerHeader;

/// Ceilings applied to a frame header before its payload is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_file_len: u64,
}

impl Limits {
    /// What the display side accepts: 640x480 at most, 1 MiB per file.
    pub const DISPLAY: Limits = Limits {
        max_width: 640,
        max_height: 480,
        max_file_len: 1024 * 1024,
    };

    pub fn no_limits() -> Self {
        Limits {
            max_width: u32::MAX,
            max_height: u32::MAX,
            max_file_len: u64::MAX,
        }
    }

    pub fn check(&self, header: &BannerHeader) -> BannerResult<()> {
        if header.width > self.max_width
            || header.height > self.max_height
            || header.file_len() > self.max_file_len
        {
            return Err(BannerError::OverLimit {
                width: header.width,
                height: header.height,
                file_len: header.file_len(),
            });
        }
        Ok(())
    }
}
