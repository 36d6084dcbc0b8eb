//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7789 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789 requires:
//! - SPI bus (MOSI + SCK), mode 0, MSB first
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low, held high at idle)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7789::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.reset(&mut delay);
//!
//! // Send command, then data
//! let _ = interface.send_command(command::SLEEP_OUT);
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Settling delay for each edge of the hardware reset pulse
///
/// The controller requires physical settling time; shortening these delays
/// is a correctness bug, not an optimization target.
pub const RESET_SETTLE_MS: u32 = 100;

/// Trait for hardware interface to the ST7789 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin polarities, additional CS control),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send exactly one byte over SPI
    /// 3. Restore DC pin high (data mode) before returning
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The DC pin is left unchanged; [`send_command`](Self::send_command)
    /// restored it to the data level, so consecutive data writes form one
    /// continuous stream. Implementations must chunk according to the
    /// underlying bus's maximum transfer size if one exists, preserving
    /// byte order.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must pulse the reset line high, then low, then
    /// high again, waiting [`RESET_SETTLE_MS`] after each edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for the ST7789
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Maximum bytes per SPI transfer; 0 = unlimited
    max_transfer_size: usize,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            max_transfer_size: 0,
        }
    }

    /// Set the maximum bytes per SPI transfer
    ///
    /// Some platform SPI drivers cap a single transfer (e.g. spidev's 4096
    /// byte default); data writes longer than this are split into
    /// consecutive transfers preserving byte order. Set to 0 (the default)
    /// for unlimited.
    pub fn set_max_transfer_size(&mut self, size: usize) -> &mut Self {
        self.max_transfer_size = size;
        self
    }

    /// Get the maximum bytes per SPI transfer (0 = unlimited)
    pub fn max_transfer_size(&self) -> usize {
        self.max_transfer_size
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        // DC idles at the data level so pixel streams need no pin traffic.
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        if self.max_transfer_size == 0 {
            return self.spi.write(data).map_err(InterfaceError::Spi);
        }
        for chunk in data.chunks(self.max_transfer_size) {
            self.spi.write(chunk).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // Reset pulse: HIGH -> LOW -> HIGH with fixed settling on each edge
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    /// Records everything crossing the mock bus, interleaved with DC edges.
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum BusEvent {
        DcLow,
        DcHigh,
        RstLow,
        RstHigh,
        Write(usize),
    }

    #[derive(Debug, Default)]
    struct BusLog {
        events: RefCell<Vec<BusEvent>>,
        bytes: RefCell<Vec<u8>>,
    }

    struct MockSpi<'a>(&'a BusLog);

    impl embedded_hal::spi::ErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl embedded_hal::spi::SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                if let embedded_hal::spi::Operation::Write(data) = op {
                    self.0.events.borrow_mut().push(BusEvent::Write(data.len()));
                    self.0.bytes.borrow_mut().extend_from_slice(data);
                }
            }
            Ok(())
        }
    }

    struct MockPin<'a> {
        log: &'a BusLog,
        low_event: BusEvent,
        high_event: BusEvent,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.events.borrow_mut().push(self.low_event);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.events.borrow_mut().push(self.high_event);
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_interface(log: &BusLog) -> Interface<MockSpi<'_>, MockPin<'_>, MockPin<'_>> {
        Interface::new(
            MockSpi(log),
            MockPin {
                log,
                low_event: BusEvent::DcLow,
                high_event: BusEvent::DcHigh,
            },
            MockPin {
                log,
                low_event: BusEvent::RstLow,
                high_event: BusEvent::RstHigh,
            },
        )
    }

    #[test]
    fn test_send_command_frames_dc_around_single_byte() {
        let log = BusLog::default();
        let mut interface = test_interface(&log);

        interface.send_command(0x2C).unwrap();

        assert_eq!(
            log.events.borrow().as_slice(),
            &[BusEvent::DcLow, BusEvent::Write(1), BusEvent::DcHigh]
        );
        assert_eq!(log.bytes.borrow().as_slice(), &[0x2C]);
    }

    #[test]
    fn test_send_data_leaves_dc_untouched() {
        let log = BusLog::default();
        let mut interface = test_interface(&log);

        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();

        assert_eq!(log.events.borrow().as_slice(), &[BusEvent::Write(3)]);
    }

    #[test]
    fn test_send_data_chunks_to_max_transfer_size() {
        let log = BusLog::default();
        let mut interface = test_interface(&log);
        interface.set_max_transfer_size(4);

        let data: Vec<u8> = (0u8..10).collect();
        interface.send_data(&data).unwrap();

        assert_eq!(
            log.events.borrow().as_slice(),
            &[BusEvent::Write(4), BusEvent::Write(4), BusEvent::Write(2)]
        );
        // Byte order preserved across chunks
        assert_eq!(log.bytes.borrow().as_slice(), data.as_slice());
    }

    #[test]
    fn test_send_data_unlimited_is_single_transfer() {
        let log = BusLog::default();
        let mut interface = test_interface(&log);
        assert_eq!(interface.max_transfer_size(), 0);

        interface.send_data(&[0u8; 100]).unwrap();

        assert_eq!(log.events.borrow().as_slice(), &[BusEvent::Write(100)]);
    }

    #[test]
    fn test_reset_pulses_high_low_high() {
        let log = BusLog::default();
        let mut interface = test_interface(&log);
        let mut delay = MockDelay;

        interface.reset(&mut delay).unwrap();

        assert_eq!(
            log.events.borrow().as_slice(),
            &[BusEvent::RstHigh, BusEvent::RstLow, BusEvent::RstHigh]
        );
    }
}
