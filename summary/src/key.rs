use std::hash::{Hash, Hasher};

use crate::error::{Result, SummaryError};

/// A key exactly as it appears in the input, borrowed from the mapped file.
///
/// Equality is byte-for-byte. The hash feeds every byte to the table's
/// hasher (aHash), so no decoding happens while scanning; [`RawKey::decode`]
/// runs once per distinct key during the merge.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawKey<'a>(&'a [u8]);

impl<'a> RawKey<'a> {
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    pub fn decode(&self) -> Result<String> {
        std::str::from_utf8(self.0)
            .map(str::to_owned)
            .map_err(|_| SummaryError::InvalidKey { key: self.lossy() })
    }

    /// Best-effort text for error messages.
    pub fn lossy(&self) -> String {
        String::from_utf8_lossy(self.0).into_owned()
    }
}

impl Hash for RawKey<'_> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.0);
    }
}

impl std::fmt::Debug for RawKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawKey({:?})", self.lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn equality_is_byte_exact() {
        let a = RawKey::new("Zürich".as_bytes());
        let b = RawKey::new("Zürich".as_bytes());
        // Same glyph, decomposed form: different bytes, different key.
        let c = RawKey::new("Zu\u{308}rich".as_bytes());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(RawKey::new(b"Zur"), RawKey::new(b"Zurich"));
    }

    #[test]
    fn keys_sharing_a_prefix_stay_apart() {
        let mut map: AHashMap<RawKey<'_>, u32> = AHashMap::new();
        for k in ["Alexandria", "Alexandra", "Alex", "Alexandria"] {
            *map.entry(RawKey::new(k.as_bytes())).or_default() += 1;
        }
        assert_eq!(map.len(), 3);
        assert_eq!(map[&RawKey::new(b"Alexandria")], 2);
    }

    #[test]
    fn decode_multibyte() {
        let key = RawKey::new("São Paulo".as_bytes());
        assert_eq!(key.decode().unwrap(), "São Paulo");
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let err = RawKey::new(&[b'A', 0xff, b'B']).decode().unwrap_err();
        assert!(matches!(err, SummaryError::InvalidKey { .. }));
    }
}
