use std::fmt;

use prost::encoding::{encoded_len_varint, key_len};

use crate::error::{DecodingError, Result};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $size:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; $size]);

        impl $name {
            /// Length in bytes of a non-empty identifier
            pub const SIZE: usize = $size;

            pub const fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// The all-zero identifier, meaning "not set".
            pub const fn empty() -> Self {
                Self([0; $size])
            }

            pub const fn bytes(&self) -> [u8; $size] {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0 == [0; $size]
            }

            /// Lowercase hex form; empty for the empty identifier.
            pub fn to_hex(&self) -> String {
                if self.is_empty() {
                    String::new()
                } else {
                    hex::encode(self.0)
                }
            }

            /// Accepts zero bytes (empty) or exactly [`Self::SIZE`] bytes.
            pub(crate) fn from_wire(bytes: &[u8]) -> Result<Self> {
                match bytes.len() {
                    0 => Ok(Self::empty()),
                    $size => {
                        let mut id = [0; $size];
                        id.copy_from_slice(bytes);
                        Ok(Self(id))
                    }
                    actual => Err(DecodingError::InvalidIdLength {
                        kind: $kind,
                        expected: $size,
                        actual,
                    }),
                }
            }

            /// The empty identifier is sent as zero bytes.
            pub(crate) fn to_wire(self) -> Vec<u8> {
                if self.is_empty() {
                    Vec::new()
                } else {
                    self.0.to_vec()
                }
            }

            pub(crate) fn encoded_len(&self, tag: u32) -> usize {
                if self.is_empty() {
                    0
                } else {
                    key_len(tag) + encoded_len_varint($size) + $size
                }
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }
    };
}

define_id!(
    /// 16 byte identifier shared by every span of a trace.
    TraceId,
    16,
    "trace id"
);

define_id!(
    /// 8 byte identifier of a span within its trace.
    SpanId,
    8,
    "span id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids() {
        assert!(TraceId::empty().is_empty());
        assert!(SpanId::default().is_empty());
        assert_eq!(TraceId::empty().to_hex(), "");
        assert!(TraceId::empty().to_wire().is_empty());
        assert_eq!(SpanId::empty().encoded_len(2), 0);
    }

    #[test]
    fn test_id_hex() {
        let id = SpanId::new([1, 2, 3, 4, 5, 6, 7, 0xff]);
        assert_eq!(id.to_hex(), "01020304050607ff");
        assert_eq!(id.to_string(), "01020304050607ff");
        assert_eq!(format!("{id:?}"), "SpanId(01020304050607ff)");
    }

    #[test]
    fn test_id_from_wire() {
        let bytes = [7u8; 16];
        assert_eq!(TraceId::from_wire(&bytes).unwrap(), TraceId::new(bytes));
        assert_eq!(TraceId::from_wire(&[]).unwrap(), TraceId::empty());
        assert_eq!(TraceId::new(bytes).to_wire(), bytes.to_vec());
        assert_eq!(TraceId::new(bytes).encoded_len(1), 1 + 1 + 16);
    }

    #[test]
    fn test_id_from_wire_rejects_bad_length() {
        let result = SpanId::from_wire(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(DecodingError::InvalidIdLength {
                kind: "span id",
                expected: 8,
                actual: 3
            })
        ));
    }
}
