/// Source of the uniform choices made while deriving display images.
pub trait ImagePicker {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Draws from OS entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomPicker;

impl ImagePicker for OsRandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let len = len as u64;
        // Reject the tail of the u64 range so every index is equally likely.
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let mut buf = [0u8; 8];
            if let Err(err) = getrandom::getrandom(&mut buf) {
                tracing::debug!(error = %err, "entropy unavailable; using first image");
                return 0;
            }
            let v = u64::from_le_bytes(buf);
            if v < zone {
                return (v % len) as usize;
            }
        }
    }
}

impl<F: FnMut(usize) -> usize> ImagePicker for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}
