/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Converts animated images into directories of banner frame files.

pub mod convert;
pub mod source;

pub use convert::convert;
