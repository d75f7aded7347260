//! Identifier type shared by interfaces, classes, and libraries.

use bytes::{Buf, BufMut};
use std::fmt;

/// 128-bit globally unique identifier.
///
/// Identifiers are compile-time constants; equality is byte-wise. The
/// field layout matches the platform GUID structure: one 32-bit field,
/// two 16-bit fields, and eight bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Size of a GUID in bytes.
    pub const SIZE: usize = 16;

    /// Nil GUID (all zeros).
    pub const NIL: Self = Self::new(0, 0, 0, [0; 8]);

    /// Create a GUID from its four fields.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Parse from string format "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
    /// accepting either hex case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 36 {
            return None;
        }
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 5 {
            return None;
        }

        let data1 = u32::from_str_radix(parts[0], 16).ok()?;
        let data2 = u16::from_str_radix(parts[1], 16).ok()?;
        let data3 = u16::from_str_radix(parts[2], 16).ok()?;
        let clock = u16::from_str_radix(parts[3], 16).ok()?;
        let node_str = parts[4];
        if node_str.len() != 12 {
            return None;
        }

        let mut data4 = [0u8; 8];
        data4[0] = (clock >> 8) as u8;
        data4[1] = clock as u8;
        for i in 0..6 {
            data4[i + 2] = u8::from_str_radix(&node_str[i * 2..i * 2 + 2], 16).ok()?;
        }

        Some(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }

    /// Encode to a buffer in little-endian layout.
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.data1);
        buf.put_u16_le(self.data2);
        buf.put_u16_le(self.data3);
        buf.put_slice(&self.data4);
    }

    /// Decode from a buffer in little-endian layout.
    pub fn decode<B: Buf>(buf: &mut B) -> Self {
        let data1 = buf.get_u32_le();
        let data2 = buf.get_u16_le();
        let data3 = buf.get_u16_le();
        let mut data4 = [0u8; 8];
        buf.copy_to_slice(&mut data4);
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// The 16-byte little-endian representation.
    pub fn to_bytes_le(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.data1.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.data4);
        bytes
    }

    /// Rebuild from the 16-byte little-endian representation.
    pub fn from_bytes_le(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ],
        })
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    const SAMPLE: Guid = Guid::new(
        0xA851_A7FE,
        0x4903,
        0x48AF,
        [0xA6, 0x94, 0x51, 0xFE, 0xB7, 0x55, 0xEE, 0x5B],
    );

    #[test]
    fn test_parse_either_case() {
        let upper = Guid::parse("A851A7FE-4903-48AF-A694-51FEB755EE5B").unwrap();
        let lower = Guid::parse("a851a7fe-4903-48af-a694-51feb755ee5b").unwrap();
        assert_eq!(upper, SAMPLE);
        assert_eq!(lower, SAMPLE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Guid::parse("").is_none());
        assert!(Guid::parse("a851a7fe-4903-48af-a694").is_none());
        assert!(Guid::parse("a851a7fe-4903-48af-a694-51feb755ee5g").is_none());
    }

    #[test]
    fn test_display_roundtrip() {
        let text = SAMPLE.to_string();
        assert_eq!(text, "a851a7fe-4903-48af-a694-51feb755ee5b");
        assert_eq!(Guid::parse(&text).unwrap(), SAMPLE);
    }

    #[test]
    fn test_encode_decode() {
        let mut buf = BytesMut::new();
        SAMPLE.encode(&mut buf);
        assert_eq!(buf.len(), Guid::SIZE);

        let decoded = Guid::decode(&mut buf.freeze());
        assert_eq!(decoded, SAMPLE);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let bytes = SAMPLE.to_bytes_le();
        assert_eq!(Guid::from_bytes_le(&bytes).unwrap(), SAMPLE);
        assert!(Guid::from_bytes_le(&bytes[..8]).is_none());
    }

    #[test]
    fn test_nil_is_zero() {
        assert_eq!(Guid::NIL.to_bytes_le(), [0u8; 16]);
    }
}
