//! Browser utility modules: persistent storage slots and media upload.

pub mod media;
pub mod storage;
