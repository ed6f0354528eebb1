/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Banner frame files: one animation frame per file, ready to be blitted.
//!
//! A frame file is a 16-byte header followed by `width * height` packed
//! pixels:
//!
//! | offset | size | contents                          |
//! |--------|------|-----------------------------------|
//! | 0      | 4    | magic `BANN`                      |
//! | 4      | 4    | width, u32 little-endian          |
//! | 8      | 4    | height, u32 little-endian         |
//! | 12     | 4    | delay in ms, u32 little-endian    |
//! | 16     | 4wh  | pixels, `(A<<24)|(R<<16)|(G<<8)|B` each stored little-endian |
//!
//! Pixels are row-major, top-left first. An animation is a directory of
//! `banner_frame_000.bin`, `banner_frame_001.bin`, ... with no gaps.

pub mod error;
pub mod frame;
pub mod header;
pub mod limits;
pub mod player;
pub mod set;

pub use error::{BannerError, BannerResult};
pub use frame::{BannerFrame, pack_pixel, unpack_pixel};
pub use header::{BannerHeader, MAGIC};
pub use limits::Limits;
pub use player::Banner;
pub use set::{frame_file_name, load_frame_set};
