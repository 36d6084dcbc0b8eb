//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]), image buffer construction ([`ImageError`]) and
//! display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`ImageError`] - Malformed caller-supplied image buffers
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use st7789::{Builder, BuilderError, Rotation};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Out-of-set rotation, rejected before any bus activity
//! let result = Rotation::from_degrees(45);
//! assert!(matches!(result, Err(BuilderError::InvalidRotation { degrees: 45 })));
//! ```

use crate::backlight::BacklightControl;
use crate::interface::DisplayInterface;

/// Maximum column (source) outputs of the ST7789 RAM grid
///
/// The controller RAM is 240x320; the shorter axis carries the columns.
///
/// NOTE: Rotation swaps which logical axis lands on the columns, so the
/// dimension check in [`crate::Builder::build`] accepts either mapping.
pub const MAX_RAM_COLUMNS: u16 = 240;

/// Maximum row (gate) outputs of the ST7789 RAM grid
pub const MAX_RAM_ROWS: u16 = 320;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface and backlight types to preserve the specific
/// underlying error types. This allows error handling code to match on the
/// hardware error that actually occurred.
#[derive(Debug)]
pub enum Error<I: DisplayInterface, B: BacklightControl> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the
    /// [`DisplayInterface`] implementation. Never retried by the driver.
    Interface(I::Error),
    /// Backlight actuation error (PWM/GPIO)
    Backlight(B::Error),
    /// Image still exceeds the visible extent after fitting
    ///
    /// Unreachable under the default aspect-preserving policy, but checked
    /// and reported rather than silently truncated.
    ImageTooLarge {
        /// Fitted image width in pixels
        width: u16,
        /// Fitted image height in pixels
        height: u16,
        /// Visible panel width in pixels
        max_width: u16,
        /// Visible panel height in pixels
        max_height: u16,
    },
    /// Image dimensions do not match the last-set window
    ///
    /// Returned by [`render_raw`](crate::Display::render_raw), which
    /// assumes the caller already addressed a matching window.
    WindowSizeMismatch {
        /// Width of the last-set window in pixels
        expected_width: u16,
        /// Height of the last-set window in pixels
        expected_height: u16,
        /// Width of the provided image in pixels
        width: u16,
        /// Height of the provided image in pixels
        height: u16,
    },
}

impl<I: DisplayInterface, B: BacklightControl> core::fmt::Display for Error<I, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::Backlight(_) => write!(f, "Backlight error"),
            Self::ImageTooLarge {
                width,
                height,
                max_width,
                max_height,
            } => {
                write!(
                    f,
                    "Image too large: {width}x{height} exceeds panel {max_width}x{max_height}"
                )
            }
            Self::WindowSizeMismatch {
                expected_width,
                expected_height,
                width,
                height,
            } => {
                write!(
                    f,
                    "Window size mismatch: window is {expected_width}x{expected_height}, image is {width}x{height}"
                )
            }
        }
    }
}

impl<I, B> core::error::Error for Error<I, B>
where
    I: DisplayInterface + core::fmt::Debug,
    B: BacklightControl + core::fmt::Debug,
{
}

/// Errors that can occur when building configuration
///
/// These errors occur before the display is created and before any bus
/// activity.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// The visible extent plus the physical offsets must fit the 240x320
    /// controller RAM in at least one axis mapping.
    InvalidDimensions {
        /// Visible width requested
        width: u16,
        /// Visible height requested
        height: u16,
    },
    /// Rotation value outside {0, 90, 180, 270}
    InvalidRotation {
        /// Rotation in degrees that was requested
        degrees: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (controller RAM is {MAX_RAM_COLUMNS}x{MAX_RAM_ROWS}, offsets included)"
            ),
            Self::InvalidRotation { degrees } => {
                write!(f, "Invalid rotation value: {degrees} (expected 0, 90, 180 or 270)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when constructing an image buffer view
#[derive(Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Buffer length does not match `width * height * 3`
    LengthMismatch {
        /// Required length in bytes
        expected: usize,
        /// Provided length in bytes
        provided: usize,
    },
    /// Width or height is zero
    ZeroDimension {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch { expected, provided } => {
                write!(
                    f,
                    "Image buffer length mismatch: expected {expected} bytes, provided {provided}"
                )
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "Image dimensions must be nonzero: {width}x{height}")
            }
        }
    }
}

impl core::error::Error for ImageError {}
