//! Backlight intensity control
//!
//! The backlight actuation mode is fixed at construction by the type the
//! caller hands to [`Display::new`](crate::Display::new):
//!
//! - [`PwmBacklight`] for continuous intensity over a duty-cycle channel
//! - [`SwitchBacklight`] for plain on/off GPIO control
//! - [`NoBacklight`] for panels with a hardwired backlight
//!
//! [`Display::set_brightness`](crate::Display::set_brightness) clamps the
//! level to `[0.0, 1.0]` before delegating here; every call is an
//! immediate, synchronous set with no hysteresis or ramping.
//!
//! ## Example
//!
//! ```
//! use st7789::backlight::{BacklightControl, SwitchBacklight};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut backlight = SwitchBacklight::new(MockPin);
//! // Binary control: any level above zero switches on
//! let _ = backlight.set_level(0.4);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

/// Trait for backlight intensity actuation
///
/// Implementations receive a level already clamped to `[0.0, 1.0]`.
pub trait BacklightControl {
    /// Error type for actuation failures
    type Error: Debug;

    /// Apply an intensity level in `[0.0, 1.0]`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying channel or pin fails.
    fn set_level(&mut self, level: f32) -> Result<(), Self::Error>;
}

/// Continuous backlight control over a PWM channel
///
/// The level maps linearly onto the channel's duty-cycle range. The PWM
/// period is fixed by the channel's own configuration (e.g. 500 Hz).
pub struct PwmBacklight<C> {
    channel: C,
}

impl<C: SetDutyCycle> PwmBacklight<C> {
    /// Create a new PWM-driven backlight
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Release the underlying PWM channel
    pub fn release(self) -> C {
        self.channel
    }
}

impl<C: SetDutyCycle> BacklightControl for PwmBacklight<C>
where
    C::Error: Debug,
{
    type Error = C::Error;

    fn set_level(&mut self, level: f32) -> Result<(), Self::Error> {
        let max = self.channel.max_duty_cycle();
        let duty = (level * f32::from(max) + 0.5) as u16;
        self.channel.set_duty_cycle(duty.min(max))
    }
}

/// Binary backlight control over a plain GPIO
///
/// Any level above zero switches the backlight on; zero switches it off.
pub struct SwitchBacklight<P> {
    pin: P,
}

impl<P: OutputPin> SwitchBacklight<P> {
    /// Create a new switched backlight
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the underlying pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> BacklightControl for SwitchBacklight<P>
where
    P::Error: Debug,
{
    type Error = P::Error;

    fn set_level(&mut self, level: f32) -> Result<(), Self::Error> {
        if level > 0.0 {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

/// No-op backlight for panels whose backlight is hardwired
#[derive(Debug, Default)]
pub struct NoBacklight;

impl BacklightControl for NoBacklight {
    type Error = core::convert::Infallible;

    fn set_level(&mut self, _level: f32) -> Result<(), Self::Error> {
        Ok(())
    }
}
