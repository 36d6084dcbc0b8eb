//! RGB565 color packing
//!
//! The ST7789 is driven here in its 16 bits-per-pixel format: each pixel is
//! packed as 5 bits red / 6 bits green / 5 bits blue by truncating the
//! low-order bits of each 8-bit channel. The conversion is lossy,
//! deterministic, and bit-exact for given 8-bit inputs; there is no alpha
//! channel and no color management.
//!
//! | Input (R, G, B)      | Packed |
//! |----------------------|--------|
//! | (0x00, 0x00, 0x00)   | 0x0000 |
//! | (0xF8, 0xFC, 0xF8)   | 0xFFFF |
//! | (0xFF, 0xFF, 0xFF)   | 0xFFFF |
//!
//! ## Example
//!
//! ```
//! use st7789::color::pack_rgb565;
//!
//! assert_eq!(pack_rgb565(0x00, 0x00, 0x00), 0x0000);
//! assert_eq!(pack_rgb565(0xF8, 0xFC, 0xF8), 0xFFFF);
//! assert_eq!(pack_rgb565(0xFF, 0x00, 0x00), 0xF800);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Byte order of the emitted 16-bit pixel stream
///
/// Must match the controller's RAM access configuration; the matching
/// RAM control parameter is written during initialization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ByteOrder {
    /// Low byte first (matches RAM control value 0xC8)
    #[default]
    LittleEndian,
    /// High byte first (matches RAM control value 0xC0)
    BigEndian,
}

impl ByteOrder {
    /// Second parameter byte of the RAM control command for this order
    ///
    /// Bit 3 of the parameter selects little-endian RAM access; the
    /// remaining bits keep the 65K RGB565 color mode.
    pub fn ram_control_value(self) -> u8 {
        match self {
            Self::LittleEndian => 0xC8,
            Self::BigEndian => 0xC0,
        }
    }
}

/// Pack an 8-bit-per-channel color into 16-bit RGB565
///
/// Low-order bits of each channel are truncated: 3 bits of red and blue,
/// 2 bits of green.
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r & 0xF8) << 8) | (u16::from(g & 0xFC) << 3) | (u16::from(b) >> 3)
}

/// Convert an interleaved RGB888 buffer into an RGB565 byte stream
///
/// Input is row-major RGB, 3 bytes per pixel; output is 2 bytes per pixel
/// in the requested byte order, ready to hand to the transport as a single
/// data write. Trailing bytes that do not form a whole pixel are ignored
/// (image construction validates the length, see
/// [`RgbImage::new`](crate::image::RgbImage::new)).
#[cfg(feature = "alloc")]
pub fn to_bytes(rgb: &[u8], order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity((rgb.len() / 3) * 2);
    for pixel in rgb.chunks_exact(3) {
        let packed = pack_rgb565(pixel[0], pixel[1], pixel[2]);
        let bytes = match order {
            ByteOrder::LittleEndian => packed.to_le_bytes(),
            ByteOrder::BigEndian => packed.to_be_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_black_is_zero() {
        assert_eq!(pack_rgb565(0, 0, 0), 0x0000);
    }

    #[test]
    fn test_pack_truncated_white_is_max() {
        // Maximum value under 5-6-5 truncation
        assert_eq!(pack_rgb565(0xF8, 0xFC, 0xF8), 0xFFFF);
        assert_eq!(pack_rgb565(0xFF, 0xFF, 0xFF), 0xFFFF);
    }

    #[test]
    fn test_pack_primaries() {
        assert_eq!(pack_rgb565(0xFF, 0x00, 0x00), 0xF800);
        assert_eq!(pack_rgb565(0x00, 0xFF, 0x00), 0x07E0);
        assert_eq!(pack_rgb565(0x00, 0x00, 0xFF), 0x001F);
    }

    #[test]
    fn test_pack_truncates_low_bits() {
        // 0x07 of red is below the 5-bit step and must vanish
        assert_eq!(pack_rgb565(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(pack_rgb565(0x08, 0x04, 0x08), pack_rgb565(0x0F, 0x07, 0x0F));
    }

    #[test]
    fn test_to_bytes_little_endian() {
        let rgb = [0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF];
        let bytes = to_bytes(&rgb, ByteOrder::LittleEndian);
        // 0xF800 -> [0x00, 0xF8], 0x001F -> [0x1F, 0x00]
        assert_eq!(bytes, [0x00, 0xF8, 0x1F, 0x00]);
    }

    #[test]
    fn test_to_bytes_big_endian() {
        let rgb = [0xFF, 0x00, 0x00];
        let bytes = to_bytes(&rgb, ByteOrder::BigEndian);
        assert_eq!(bytes, [0xF8, 0x00]);
    }

    #[test]
    fn test_ram_control_values() {
        assert_eq!(ByteOrder::LittleEndian.ram_control_value(), 0xC8);
        assert_eq!(ByteOrder::BigEndian.ram_control_value(), 0xC0);
        assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    }
}
