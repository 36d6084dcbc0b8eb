//! ST7789 TFT Display Driver
//!
//! A driver for the ST7789 LCD controller driving RGB565 panels up to
//! 240x320 pixels over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Configurable display dimensions, rotation and RAM offsets
//! - Aspect-preserving image fit with nearest-neighbor resampling
//!   (with `alloc` feature)
//! - PWM or on/off backlight control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7789::{Builder, Dimensions, Display, Interface, NoBacklight, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let dims = match Dimensions::new(320, 172) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new()
//!     .dimensions(dims)
//!     .rotation(Rotation::Rotate90)
//!     .offset(0, 34)
//!     .invert_colors(true)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, NoBacklight, config);
//! let _ = display.init(&mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Backlight actuation
pub mod backlight;
/// RGB565 color packing
pub mod color;
/// ST7789 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Image-fit transform
pub mod fit;
/// Caller-supplied image buffers
pub mod image;
/// Hardware interface abstraction
pub mod interface;

pub use backlight::{BacklightControl, NoBacklight, PwmBacklight, SwitchBacklight};
pub use color::ByteOrder;
pub use config::{
    Builder, ColorOrder, Config, Dimensions, MAX_RAM_COLUMNS, MAX_RAM_ROWS, Rotation,
};
pub use display::Display;
pub use error::{BuilderError, Error, ImageError};
pub use fit::FitPolicy;
pub use image::RgbImage;
pub use interface::{DisplayInterface, Interface, InterfaceError};
