use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::error::{Result, SimError};

/// Backing store - read-only source of all 256 pages of data.
///
/// The on-disk blob is read once at construction; page fetches afterwards
/// are pure slicing, no seeks.
pub struct BackingStore {
    data: Box<[u8; BACKING_STORE_SIZE]>,
}

impl BackingStore {
    /// Open and fully read a backing-store image.
    ///
    /// Fails if the file cannot be read or holds fewer than 65536 bytes.
    /// Longer files are accepted; only the first 65536 bytes are addressable.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut bytes = fs::read(path.as_ref()).map_err(|e| SimError::BackingStoreOpen {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;

        if bytes.len() < BACKING_STORE_SIZE {
            return Err(SimError::BackingStoreTruncated(bytes.len()));
        }
        bytes.truncate(BACKING_STORE_SIZE);

        Ok(Self::from_boxed(bytes.into_boxed_slice()))
    }

    /// Build a store from an in-memory blob of exactly 65536 bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() != BACKING_STORE_SIZE {
            return Err(SimError::BackingStoreTruncated(bytes.len()));
        }
        Ok(Self::from_boxed(bytes.into_boxed_slice()))
    }

    fn from_boxed(data: Box<[u8]>) -> Self {
        // Length is checked by both constructors, so the conversion is infallible
        let data: Box<[u8; BACKING_STORE_SIZE]> = data.try_into().unwrap();
        BackingStore { data }
    }

    /// Read the 256-byte block for a page number
    #[inline]
    pub fn read(&self, page: u8) -> &[u8; PAGE_SIZE] {
        let start = page as usize * PAGE_SIZE;
        self.data[start..start + PAGE_SIZE].try_into().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_bytes() -> Vec<u8> {
        // Each block is filled with its own page number
        (0..BACKING_STORE_SIZE)
            .map(|i| (i / PAGE_SIZE) as u8)
            .collect()
    }

    #[test]
    fn test_read_blocks() {
        let store = BackingStore::from_bytes(patterned_bytes()).unwrap();

        assert_eq!(store.read(0)[0], 0);
        assert_eq!(store.read(0)[255], 0);
        assert_eq!(store.read(7)[0], 7);
        assert_eq!(store.read(255)[128], 255);
    }

    #[test]
    fn test_from_bytes_wrong_length() {
        let result = BackingStore::from_bytes(vec![0u8; 100]);
        assert!(matches!(result, Err(SimError::BackingStoreTruncated(100))));
    }

    #[test]
    fn test_open_missing_file() {
        let result = BackingStore::open("/nonexistent/BACKING_STORE.bin");
        assert!(matches!(result, Err(SimError::BackingStoreOpen { .. })));
    }
}
