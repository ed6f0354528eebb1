/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::error::{BannerError, BannerResult};
use crate::frame::BannerFrame;
use crate::header::BannerHeader;
use crate::limits::Limits;

/// File name of frame `index` inside a frame directory.
pub fn frame_file_name(index: usize) -> String {
    format!("banner_frame_{index:03}.bin")
}

/// Loads `banner_frame_000.bin`, `banner_frame_001.bin`, ... from `dir`,
/// stopping at the first index with no file. Every header is checked
/// against `limits` before its payload is read.
///
/// An empty or missing directory yields an empty set.
pub fn load_frame_set(dir: impl AsRef<Path>, limits: &Limits) -> BannerResult<Vec<BannerFrame>> {
    let dir = dir.as_ref();
    let mut frames = Vec::new();
    loop {
        let path = dir.join(frame_file_name(frames.len()));
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => break,
            Err(e) => return Err(BannerError::Io(e)),
        };
        let actual = file.metadata()?.len();
        let mut reader = BufReader::new(file);
        let header = BannerHeader::read_from(&mut reader)?;
        limits.check(&header)?;
        if actual != header.file_len() {
            return Err(BannerError::SizeMismatch {
                expected: header.file_len(),
                actual,
            });
        }
        frames.push(BannerFrame::read_payload(&mut reader, header)?);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("banner-set-{}-{name}", std::process::id()));
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn write_frame(dir: &Path, index: usize, frame: &BannerFrame) {
        let mut bytes = Vec::new();
        frame.write_to(&mut bytes).unwrap();
        fs::write(dir.join(frame_file_name(index)), bytes).unwrap();
    }

    fn solid(width: u32, height: u32, delay_ms: u32, rgba: [u8; 4]) -> BannerFrame {
        let data = rgba.repeat(width as usize * height as usize);
        BannerFrame::from_rgba(width, height, delay_ms, &data).unwrap()
    }

    #[test]
    fn names_are_zero_padded() {
        assert_eq!(frame_file_name(0), "banner_frame_000.bin");
        assert_eq!(frame_file_name(7), "banner_frame_007.bin");
        assert_eq!(frame_file_name(123), "banner_frame_123.bin");
        assert_eq!(frame_file_name(1000), "banner_frame_1000.bin");
    }

    #[test]
    fn loads_contiguous_frames_in_order() {
        let dir = temp_dir("contiguous");
        let first = solid(2, 2, 40, [255, 0, 0, 255]);
        let second = solid(2, 2, 60, [0, 255, 0, 255]);
        write_frame(&dir, 0, &first);
        write_frame(&dir, 1, &second);

        let frames = load_frame_set(&dir, &Limits::DISPLAY).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert_eq!(frames, vec![first, second]);
    }

    #[test]
    fn stops_at_first_gap() {
        let dir = temp_dir("gap");
        let frame = solid(1, 1, 10, [1, 2, 3, 4]);
        write_frame(&dir, 0, &frame);
        write_frame(&dir, 2, &frame);

        let frames = load_frame_set(&dir, &Limits::DISPLAY).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn missing_directory_is_empty() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("banner-set-{}-absent", std::process::id()));
        assert_eq!(load_frame_set(&dir, &Limits::DISPLAY).unwrap(), vec![]);
    }

    #[test]
    fn oversized_frame_fails_the_whole_load() {
        let dir = temp_dir("oversized");
        write_frame(&dir, 0, &solid(1, 1, 10, [0, 0, 0, 255]));
        // Header claims 800x600; only the header is on disk, the limit
        // check fires before the payload length is even considered.
        let header = BannerHeader {
            width: 800,
            height: 600,
            delay_ms: 10,
        };
        fs::write(dir.join(frame_file_name(1)), header.to_bytes()).unwrap();

        let result = load_frame_set(&dir, &Limits::DISPLAY);
        let _ = fs::remove_dir_all(&dir);
        assert!(matches!(result, Err(BannerError::OverLimit { .. })));
    }

    #[test]
    fn unlimited_load_still_rejects_impossible_sizes() {
        let dir = temp_dir("impossible");
        let header = BannerHeader {
            width: u32::MAX,
            height: u32::MAX,
            delay_ms: 10,
        };
        fs::write(dir.join(frame_file_name(0)), header.to_bytes()).unwrap();

        let result = load_frame_set(&dir, &Limits::no_limits());
        let _ = fs::remove_dir_all(&dir);
        assert!(matches!(result, Err(BannerError::SizeMismatch { .. })));
    }

    #[test]
    fn corrupt_magic_fails_the_whole_load() {
        let dir = temp_dir("corrupt");
        fs::write(dir.join(frame_file_name(0)), b"JUNKJUNKJUNKJUNK").unwrap();

        let result = load_frame_set(&dir, &Limits::DISPLAY);
        let _ = fs::remove_dir_all(&dir);
        assert!(matches!(result, Err(BannerError::BadMagic(_))));
    }
}
