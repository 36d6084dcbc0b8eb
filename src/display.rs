//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;

use crate::backlight::BacklightControl;
use crate::command::{
    COLUMN_ADDRESS_SET, DISPLAY_OFF, DISPLAY_ON, FRAME_RATE_CONTROL, GAMMA_NEGATIVE,
    GAMMA_POSITIVE, GATE_CONTROL, INVERT_OFF, INVERT_ON, LCM_CONTROL, MEMORY_ACCESS_CONTROL,
    MEMORY_WRITE, PIXEL_FORMAT, PORCH_CONTROL, POWER_CONTROL1, RAM_CONTROL, ROW_ADDRESS_SET,
    SLEEP_OUT, SOFT_RESET, VCOM_SETTING, VDV_SET, VDV_VRH_ENABLE, VRH_SET,
};
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;

#[cfg(feature = "alloc")]
use crate::color;
#[cfg(feature = "alloc")]
use crate::fit::{self, FitPolicy};
#[cfg(feature = "alloc")]
use crate::image::RgbImage;

type DisplayResult<I, B> = core::result::Result<(), Error<I, B>>;

/// Settling time after software reset in milliseconds
const SOFT_RESET_SETTLE_MS: u32 = 150;
/// Settling time after display-on in milliseconds
const DISPLAY_ON_SETTLE_MS: u32 = 100;

// Fixed register tables applied once at init, never re-derived at runtime.

/// Porch timing for normal and idle modes
const PORCH_TABLE: [u8; 5] = [0x0C, 0x0C, 0x00, 0x33, 0x33];
/// 16 bits per pixel (RGB565)
const PIXEL_FORMAT_16BPP: u8 = 0x05;
/// Gate voltage setting
const GATE_CONTROL_VALUE: u8 = 0x14;
/// VCOM voltage setting
const VCOM_VALUE: u8 = 0x37;
/// LCM control setting
const LCM_CONTROL_VALUE: u8 = 0x2C;
/// Take VDV/VRH from command registers
const VDV_VRH_ENABLE_VALUE: u8 = 0x01;
/// VRH voltage setting
const VRH_VALUE: u8 = 0x13;
/// VDV voltage setting
const VDV_VALUE: u8 = 0x20;
/// Power control 1 parameters
const POWER_CONTROL1_TABLE: [u8; 2] = [0xA4, 0xA1];
/// 60Hz frame rate in normal mode
const FRAME_RATE_60HZ: u8 = 0x0F;
/// Positive voltage gamma curve
const GAMMA_POSITIVE_TABLE: [u8; 14] = [
    0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
];
/// Negative voltage gamma curve
const GAMMA_NEGATIVE_TABLE: [u8; 14] = [
    0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
];

/// Zero fill source for clears; streamed repeatedly to avoid allocation
const ZERO_CHUNK: [u8; 512] = [0; 512];

/// Core display driver for the ST7789
///
/// Owns the hardware interface, the backlight actuator and the panel
/// configuration for its entire lifetime. Every public operation blocks
/// until all bus transactions it issues complete; there is no internal
/// queuing or background work. The driver is not safe for concurrent use
/// from multiple threads without an external mutual-exclusion wrapper.
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: BacklightControl,
{
    /// Hardware interface
    interface: I,
    /// Backlight actuator
    backlight: B,
    /// Panel configuration
    config: Config,
    /// Size of the last-set window in pixels, pre-offset
    last_window: (u16, u16),
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: BacklightControl,
{
    /// Create a new Display instance
    ///
    /// The controller is untouched until [`init`](Self::init) runs.
    pub fn new(interface: I, backlight: B, config: Config) -> Self {
        let last_window = (config.dimensions.width, config.dimensions.height);
        Self {
            interface,
            backlight,
            config,
            last_window,
        }
    }

    /// Bring the controller to a known, displaying state
    ///
    /// Runs the full initialization program: backlight off, hardware
    /// reset, software reset, orientation and fixed register tables,
    /// sleep-out, display-on, default full-panel window, full clear, then
    /// backlight restored to full. The backlight is held off during
    /// bring-up so uninitialized frame memory is never visible.
    ///
    /// Re-running the sequence is safe and idempotent; it must not be
    /// invoked concurrently with a render.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I, B> {
        debug!(
            "initializing {}x{} panel, rotation {}, {} Hz bus, {} fps target",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.rotation.degrees(),
            self.config.spi_clock_hz,
            self.config.frame_rate_hz,
        );

        self.set_brightness(0.0)?;
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.send_command(SOFT_RESET)?;
        delay.delay_ms(SOFT_RESET_SETTLE_MS);

        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[self.config.madctl()])?;
        self.send_command(if self.config.invert_colors {
            INVERT_ON
        } else {
            INVERT_OFF
        })?;

        self.send_command(PORCH_CONTROL)?;
        self.send_data(&PORCH_TABLE)?;
        self.send_command(PIXEL_FORMAT)?;
        self.send_data(&[PIXEL_FORMAT_16BPP])?;
        self.send_command(GATE_CONTROL)?;
        self.send_data(&[GATE_CONTROL_VALUE])?;
        self.send_command(VCOM_SETTING)?;
        self.send_data(&[VCOM_VALUE])?;
        self.send_command(LCM_CONTROL)?;
        self.send_data(&[LCM_CONTROL_VALUE])?;
        self.send_command(VDV_VRH_ENABLE)?;
        self.send_data(&[VDV_VRH_ENABLE_VALUE])?;
        self.send_command(VRH_SET)?;
        self.send_data(&[VRH_VALUE])?;
        self.send_command(VDV_SET)?;
        self.send_data(&[VDV_VALUE])?;
        self.send_command(POWER_CONTROL1)?;
        self.send_data(&POWER_CONTROL1_TABLE)?;
        self.send_command(FRAME_RATE_CONTROL)?;
        self.send_data(&[FRAME_RATE_60HZ])?;

        self.send_command(GAMMA_POSITIVE)?;
        self.send_data(&GAMMA_POSITIVE_TABLE)?;
        self.send_command(GAMMA_NEGATIVE)?;
        self.send_data(&GAMMA_NEGATIVE_TABLE)?;

        // Pixel stream byte order must match the conversion in color::to_bytes
        self.send_command(RAM_CONTROL)?;
        self.send_data(&[0x00, self.config.byte_order.ram_control_value()])?;

        self.send_command(SLEEP_OUT)?;
        self.send_command(DISPLAY_ON)?;
        delay.delay_ms(DISPLAY_ON_SETTLE_MS);

        self.set_window(0, 0, None, None)?;
        self.clear()?;
        self.set_brightness(1.0)?;

        debug!("panel initialized");
        Ok(())
    }

    /// Address a rectangular window of the visible area
    ///
    /// Coordinates are inclusive and in visible space; omitted end
    /// coordinates default to the full visible extent. The configured
    /// physical offsets are added before the addressing commands are
    /// emitted, and a memory-write command arms the controller for the
    /// following pixel stream.
    ///
    /// The rectangle is trusted to lie within the visible extent; callers
    /// on the render path validate it beforehand.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: Option<u16>,
        y1: Option<u16>,
    ) -> DisplayResult<I, B> {
        let x1 = x1.unwrap_or(self.config.dimensions.width - 1);
        let y1 = y1.unwrap_or(self.config.dimensions.height - 1);

        self.last_window = (x1 - x0 + 1, y1 - y0 + 1);
        trace!("window ({x0},{y0})..({x1},{y1}), {}x{}", self.last_window.0, self.last_window.1);

        let x0 = x0 + self.config.offset_left;
        let x1 = x1 + self.config.offset_left;
        let y0 = y0 + self.config.offset_top;
        let y1 = y1 + self.config.offset_top;

        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&[
            (x0 >> 8) as u8,
            (x0 & 0xFF) as u8,
            (x1 >> 8) as u8,
            (x1 & 0xFF) as u8,
        ])?;
        self.send_command(ROW_ADDRESS_SET)?;
        self.send_data(&[
            (y0 >> 8) as u8,
            (y0 & 0xFF) as u8,
            (y1 >> 8) as u8,
            (y1 & 0xFF) as u8,
        ])?;
        self.send_command(MEMORY_WRITE)?;
        Ok(())
    }

    /// Fit an image to the panel and render it, using the default policy
    ///
    /// The default policy preserves aspect ratio and never upscales; see
    /// [`render_with`](Self::render_with).
    #[cfg(feature = "alloc")]
    pub fn render(&mut self, image: &RgbImage<'_>) -> DisplayResult<I, B> {
        self.render_with(image, FitPolicy::default())
    }

    /// Fit an image to the panel under an explicit policy and render it
    ///
    /// The image is rescaled per the policy, centered in the visible area
    /// (letterbox margins are left at whatever a prior clear painted), the
    /// resulting window is addressed, and the converted pixel stream is
    /// written in a single data transaction.
    ///
    /// There is no partial-success state: on failure the controller memory
    /// may be left partially written; the next successful render fully
    /// overwrites the addressed rectangle.
    #[cfg(feature = "alloc")]
    pub fn render_with(&mut self, image: &RgbImage<'_>, policy: FitPolicy) -> DisplayResult<I, B> {
        let width = self.config.dimensions.width;
        let height = self.config.dimensions.height;

        let (fit_w, fit_h) =
            fit::fit_dimensions((image.width(), image.height()), (width, height), policy);
        if fit_w > width || fit_h > height {
            return Err(Error::ImageTooLarge {
                width: fit_w,
                height: fit_h,
                max_width: width,
                max_height: height,
            });
        }

        let pixels: Cow<'_, [u8]> = if (fit_w, fit_h) == (image.width(), image.height()) {
            Cow::Borrowed(image.data())
        } else {
            Cow::Owned(fit::resize_nearest(image, fit_w, fit_h))
        };

        let x0 = (width - fit_w) / 2;
        let y0 = (height - fit_h) / 2;
        self.set_window(x0, y0, Some(x0 + fit_w - 1), Some(y0 + fit_h - 1))?;

        trace!("rendering {fit_w}x{fit_h} at ({x0},{y0})");
        let bytes = color::to_bytes(&pixels, self.config.byte_order);
        self.send_data(&bytes)
    }

    /// Render an image that already matches the current window
    ///
    /// Skips the fit transform entirely; the image dimensions must equal
    /// the last-set window. The memory-write command is re-issued to reset
    /// the controller's write pointer to the window origin before
    /// streaming.
    #[cfg(feature = "alloc")]
    pub fn render_raw(&mut self, image: &RgbImage<'_>) -> DisplayResult<I, B> {
        if (image.width(), image.height()) != self.last_window {
            return Err(Error::WindowSizeMismatch {
                expected_width: self.last_window.0,
                expected_height: self.last_window.1,
                width: image.width(),
                height: image.height(),
            });
        }
        self.send_command(MEMORY_WRITE)?;
        let bytes = color::to_bytes(image.data(), self.config.byte_order);
        self.send_data(&bytes)
    }

    /// Clear the full visible area to black
    ///
    /// Addresses the full-panel window (honoring offsets) and streams a
    /// zero fill for every visible pixel.
    pub fn clear(&mut self) -> DisplayResult<I, B> {
        self.set_window(0, 0, None, None)?;
        self.fill_zero(self.config.dimensions.frame_size())
    }

    /// Clear the last-set window to black
    ///
    /// Re-arms the memory write so the fill starts at the window origin.
    pub fn clear_window(&mut self) -> DisplayResult<I, B> {
        self.send_command(MEMORY_WRITE)?;
        let bytes = usize::from(self.last_window.0) * usize::from(self.last_window.1) * 2;
        self.fill_zero(bytes)
    }

    /// Set backlight intensity
    ///
    /// The value is clamped to `[0.0, 1.0]` on every call. Under binary
    /// actuation any value above zero switches the backlight on.
    pub fn set_brightness(&mut self, value: f32) -> DisplayResult<I, B> {
        self.backlight
            .set_level(value.clamp(0.0, 1.0))
            .map_err(Error::Backlight)
    }

    /// Blank and power down the panel
    ///
    /// Clears the visible area, turns the display output off and switches
    /// the backlight off. The controller stays reachable; a later
    /// [`init`](Self::init) brings it back.
    pub fn shutdown(&mut self) -> DisplayResult<I, B> {
        debug!("shutting down panel");
        self.clear()?;
        self.send_command(DISPLAY_OFF)?;
        self.set_brightness(0.0)
    }

    /// Get the visible panel dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Get the configured rotation
    pub fn rotation(&self) -> crate::config::Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware handles
    ///
    /// Consumes the driver and hands back the interface and backlight so
    /// the caller can reuse or tear down the underlying bus and pins.
    pub fn release(self) -> (I, B) {
        (self.interface, self.backlight)
    }

    /// Stream `len` zero bytes into the armed window
    fn fill_zero(&mut self, len: usize) -> DisplayResult<I, B> {
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(ZERO_CHUNK.len());
            self.send_data(&ZERO_CHUNK[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I, B> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I, B> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}
