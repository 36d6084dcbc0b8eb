//! ST7789 command definitions
//!
//! This module defines the command bytes used to control the ST7789
//! TFT LCD controller. Commands are sent over SPI with the DC pin
//! low for commands and high for parameter/pixel data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7789::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Arm the RAM write, then stream pixels
//! let _ = interface.send_command(command::MEMORY_WRITE);
//! let _ = interface.send_data(&pixel_data);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset command (0x01)
///
/// Resets the controller registers to their defaults. The controller
/// needs about 120ms of settling time before the next command.
pub const SOFT_RESET: u8 = 0x01;

/// Enter sleep mode command (0x10)
pub const SLEEP_IN: u8 = 0x10;

/// Exit sleep mode command (0x11)
///
/// Required before the panel can display anything after reset.
pub const SLEEP_OUT: u8 = 0x11;

/// Normal display mode on command (0x13)
pub const NORMAL_MODE: u8 = 0x13;

/// Display inversion off command (0x20)
pub const INVERT_OFF: u8 = 0x20;

/// Display inversion on command (0x21)
///
/// Many ST7789 panels are wired so that inverted mode yields correct
/// colors; configure via [`crate::Builder::invert_colors`].
pub const INVERT_ON: u8 = 0x21;

/// Display off command (0x28)
///
/// Blanks the panel output without disturbing frame memory.
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPLAY_ON: u8 = 0x29;

// RAM addressing commands

/// Column address set command (0x2A)
///
/// Sets the column (X) range of the addressable window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB], inclusive.
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Sets the row (Y) range of the addressable window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB], inclusive.
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Arms the controller to accept a pixel stream addressed to the window
/// set by [`COLUMN_ADDRESS_SET`]/[`ROW_ADDRESS_SET`]. Issuing it again
/// resets the write pointer to the window origin.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory access control command (0x36)
///
/// Single configuration byte encoding mirroring, axis swap and channel
/// order. See the `MADCTL_*` bit masks below.
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte; 0x05 selects 16 bits per pixel (RGB565).
pub const PIXEL_FORMAT: u8 = 0x3A;

// Panel configuration commands

/// RAM control command (0xB0)
///
/// Requires 2 bytes. The second byte selects the RAM access byte order;
/// 0xC8 is little endian with 65K RGB565 colors.
pub const RAM_CONTROL: u8 = 0xB0;

/// Porch setting command (0xB2)
///
/// Front/back porch timing for normal and idle modes. Requires 5 bytes.
pub const PORCH_CONTROL: u8 = 0xB2;

/// Gate control command (0xB7)
///
/// Sets VGH/VGL gate voltages. Requires 1 byte.
pub const GATE_CONTROL: u8 = 0xB7;

/// VCOM setting command (0xBB)
///
/// Requires 1 byte.
pub const VCOM_SETTING: u8 = 0xBB;

/// LCM control command (0xC0)
///
/// Requires 1 byte.
pub const LCM_CONTROL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2)
///
/// Requires 1 byte; 0x01 takes VDV/VRH from the command registers.
pub const VDV_VRH_ENABLE: u8 = 0xC2;

/// VRH set command (0xC3)
///
/// Requires 1 byte.
pub const VRH_SET: u8 = 0xC3;

/// VDV set command (0xC4)
///
/// Requires 1 byte.
pub const VDV_SET: u8 = 0xC4;

/// Frame rate control command (0xC6)
///
/// Requires 1 byte; 0x0F selects 60Hz in normal mode.
pub const FRAME_RATE_CONTROL: u8 = 0xC6;

/// Power control 1 command (0xD0)
///
/// Requires 2 bytes.
pub const POWER_CONTROL1: u8 = 0xD0;

/// Positive voltage gamma control command (0xE0)
///
/// Requires 14 bytes.
pub const GAMMA_POSITIVE: u8 = 0xE0;

/// Negative voltage gamma control command (0xE1)
///
/// Requires 14 bytes.
pub const GAMMA_NEGATIVE: u8 = 0xE1;

// MADCTL bit masks (parameter of MEMORY_ACCESS_CONTROL)

/// Row address order: mirror vertically when set
pub const MADCTL_MY: u8 = 0x80;

/// Column address order: mirror horizontally when set
pub const MADCTL_MX: u8 = 0x40;

/// Row/column exchange: swap the X and Y axes when set
pub const MADCTL_MV: u8 = 0x20;

/// Line address order (vertical refresh direction)
pub const MADCTL_ML: u8 = 0x10;

/// Color channel order: BGR when set, RGB when clear
pub const MADCTL_BGR: u8 = 0x08;
