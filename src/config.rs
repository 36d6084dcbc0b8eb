//! Display configuration types and builder

use crate::color::ByteOrder;
use crate::command::{MADCTL_BGR, MADCTL_ML, MADCTL_MV, MADCTL_MX, MADCTL_MY};

pub use crate::error::{BuilderError, MAX_RAM_COLUMNS, MAX_RAM_ROWS};

/// Visible panel dimensions
///
/// These describe the visible area in post-rotation coordinates; the
/// physical offsets in [`Config`] translate them into the controller's
/// larger RAM grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either extent is zero
    /// or exceeds the longer RAM axis ([`MAX_RAM_ROWS`]). The combined
    /// footprint including offsets is checked by [`Builder::build`].
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_RAM_ROWS || height == 0 || height > MAX_RAM_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bytes required for one full frame at 16 bits per pixel
    pub fn frame_size(&self) -> usize {
        self.width as usize * self.height as usize * 2
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Parse a rotation from degrees
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidRotation` for any value outside
    /// {0, 90, 180, 270}, before any bus activity.
    pub fn from_degrees(degrees: u16) -> Result<Self, BuilderError> {
        match degrees {
            0 => Ok(Self::Rotate0),
            90 => Ok(Self::Rotate90),
            180 => Ok(Self::Rotate180),
            270 => Ok(Self::Rotate270),
            _ => Err(BuilderError::InvalidRotation { degrees }),
        }
    }

    /// Rotation in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// MADCTL mirror/axis-swap bits for this rotation
    ///
    /// 0° sets no extra bits; 90° mirrors vertically and swaps axes;
    /// 180° mirrors both axes; 270° mirrors horizontally and swaps axes.
    pub fn madctl_bits(self) -> u8 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => MADCTL_MV | MADCTL_MY,
            Self::Rotate180 => MADCTL_MX | MADCTL_MY,
            Self::Rotate270 => MADCTL_MX | MADCTL_MV,
        }
    }
}

/// Color channel order expected by the panel wiring
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorOrder {
    /// Native RGB subpixel order
    #[default]
    Rgb,
    /// Swapped (BGR) subpixel order
    Bgr,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7789 controller.
/// Immutable after construction; use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Visible panel dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Color channel order
    pub color_order: ColorOrder,
    /// Whether to enable display inversion (panel wiring dependent)
    pub invert_colors: bool,
    /// Physical offset of the visible area from the RAM grid's left edge
    pub offset_left: u16,
    /// Physical offset of the visible area from the RAM grid's top edge
    pub offset_top: u16,
    /// Byte order of the emitted pixel stream
    pub byte_order: ByteOrder,
    /// SPI clock rate in Hz (informational; the bus is configured by the caller)
    pub spi_clock_hz: u32,
    /// Target frame rate in Hz (informational only)
    pub frame_rate_hz: u16,
}

impl Config {
    /// Compute the orientation configuration byte (MADCTL)
    ///
    /// OR of: line-address order (always set), the channel-order bit when
    /// swapped, and the rotation's mirror/axis-swap bit pair.
    pub fn madctl(&self) -> u8 {
        let mut value = MADCTL_ML;
        value |= self.rotation.madctl_bits();
        if self.color_order == ColorOrder::Bgr {
            value |= MADCTL_BGR;
        }
        value
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7789::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(320, 172) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .rotation(Rotation::Rotate90)
///     .offset(0, 34)
///     .invert_colors(true)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Visible panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Color channel order
    color_order: ColorOrder,
    /// Whether to enable display inversion
    invert_colors: bool,
    /// Physical offset from the RAM grid's left edge
    offset_left: u16,
    /// Physical offset from the RAM grid's top edge
    offset_top: u16,
    /// Byte order of the emitted pixel stream
    byte_order: ByteOrder,
    /// SPI clock rate in Hz (informational)
    spi_clock_hz: u32,
    /// Target frame rate in Hz (informational)
    frame_rate_hz: u16,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            color_order: ColorOrder::Rgb,
            invert_colors: false,
            offset_left: 0,
            offset_top: 0,
            byte_order: ByteOrder::LittleEndian,
            // Informational defaults; the bus itself is configured by the caller
            spi_clock_hz: 62_500_000,
            frame_rate_hz: 60,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set visible panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set color channel order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Enable or disable display inversion
    pub fn invert_colors(mut self, invert: bool) -> Self {
        self.invert_colors = invert;
        self
    }

    /// Set the physical offset mapping visible space into the RAM grid
    pub fn offset(mut self, left: u16, top: u16) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self
    }

    /// Set the byte order of the emitted pixel stream
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Record the SPI clock rate in Hz (informational)
    pub fn spi_clock_hz(mut self, hz: u32) -> Self {
        self.spi_clock_hz = hz;
        self
    }

    /// Record the target frame rate in Hz (informational)
    pub fn frame_rate_hz(mut self, hz: u16) -> Self {
        self.frame_rate_hz = hz;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not
    /// set, or `BuilderError::InvalidDimensions` if the visible area plus
    /// offsets cannot fit the 240x320 RAM grid in either axis mapping.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;

        let x_extent = dimensions.width.saturating_add(self.offset_left);
        let y_extent = dimensions.height.saturating_add(self.offset_top);
        // Rotation decides which logical axis lands on the 240 columns
        let fits = (x_extent <= MAX_RAM_COLUMNS && y_extent <= MAX_RAM_ROWS)
            || (x_extent <= MAX_RAM_ROWS && y_extent <= MAX_RAM_COLUMNS);
        if !fits {
            return Err(BuilderError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        Ok(Config {
            dimensions,
            rotation: self.rotation,
            color_order: self.color_order,
            invert_colors: self.invert_colors,
            offset_left: self.offset_left,
            offset_top: self.offset_top,
            byte_order: self.byte_order,
            spi_clock_hz: self.spi_clock_hz,
            frame_rate_hz: self.frame_rate_hz,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_rotation(rotation: Rotation) -> Config {
        Builder::new()
            .dimensions(Dimensions::new(320, 172).unwrap())
            .rotation(rotation)
            .build()
            .unwrap()
    }

    #[test]
    fn test_madctl_rotation_table() {
        // ML is always set; rotation adds its mirror/swap bit pair
        assert_eq!(config_with_rotation(Rotation::Rotate0).madctl(), 0x10);
        assert_eq!(config_with_rotation(Rotation::Rotate90).madctl(), 0x10 | 0x20 | 0x80);
        assert_eq!(config_with_rotation(Rotation::Rotate180).madctl(), 0x10 | 0x40 | 0x80);
        assert_eq!(config_with_rotation(Rotation::Rotate270).madctl(), 0x10 | 0x40 | 0x20);
    }

    #[test]
    fn test_madctl_bgr_bit() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 172).unwrap())
            .color_order(ColorOrder::Bgr)
            .build()
            .unwrap();
        assert_eq!(config.madctl(), 0x10 | 0x08);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Ok(Rotation::Rotate0));
        assert_eq!(Rotation::from_degrees(90), Ok(Rotation::Rotate90));
        assert_eq!(Rotation::from_degrees(180), Ok(Rotation::Rotate180));
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::Rotate270));
        assert_eq!(
            Rotation::from_degrees(45),
            Err(BuilderError::InvalidRotation { degrees: 45 })
        );
        assert_eq!(
            Rotation::from_degrees(360),
            Err(BuilderError::InvalidRotation { degrees: 360 })
        );
    }

    #[test]
    fn test_dimensions_reject_zero_extent() {
        assert!(Dimensions::new(0, 172).is_err());
        assert!(Dimensions::new(320, 0).is_err());
    }

    #[test]
    fn test_dimensions_reject_oversized_extent() {
        assert!(Dimensions::new(321, 172).is_err());
        assert!(Dimensions::new(320, 320).is_ok());
    }

    #[test]
    fn test_build_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn test_build_rejects_footprint_exceeding_ram() {
        // 320x172 with a 34 pixel top offset fits (320x206 maps onto 320x240)
        let ok = Builder::new()
            .dimensions(Dimensions::new(320, 172).unwrap())
            .offset(0, 34)
            .build();
        assert!(ok.is_ok());

        // 320x320 can never fit the 240 column axis
        let too_big = Builder::new()
            .dimensions(Dimensions::new(320, 320).unwrap())
            .build();
        assert!(matches!(
            too_big,
            Err(BuilderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_frame_size() {
        let dims = Dimensions::new(320, 172).unwrap();
        assert_eq!(dims.frame_size(), 320 * 172 * 2);
    }
}
