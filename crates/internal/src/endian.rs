//! Endianness utility functions

/// Convert a u16 from little-endian byte order to native byte order
pub fn u16_from_le_bytes(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 from native byte order to little-endian bytes
pub fn u16_to_le_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Convert a u32 from little-endian byte order to native byte order
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to little-endian bytes
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_round_trip() {
        let bytes = [0x1B, 0x20];
        assert_eq!(u16_from_le_bytes(&bytes), 0x201B);
        assert_eq!(u16_to_le_bytes(0x201B), bytes);
    }

    #[test]
    fn u32_round_trip() {
        let bytes = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(u32_from_le_bytes(&bytes), 0x12345678);
        assert_eq!(u32_to_le_bytes(0x12345678), bytes);
    }
}
