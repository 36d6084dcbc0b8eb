//! Image-fit transform
//!
//! Rescales an arbitrary-resolution image to the panel's visible
//! resolution under an aspect-preserving, no-upscale-by-default policy,
//! using integer arithmetic throughout (floor semantics).
//!
//! The transform only computes dimensions and resamples pixels; centering
//! and window addressing happen in [`render`](crate::Display::render).
//! Letterbox margins are not painted, a prior clear establishes the margin
//! color.
//!
//! ## Example
//!
//! ```
//! use st7789::fit::{fit_dimensions, FitPolicy};
//!
//! // Twice the panel size scales by 0.5 in both axes
//! let scaled = fit_dimensions((640, 344), (320, 172), FitPolicy::default());
//! assert_eq!(scaled, (320, 172));
//!
//! // Smaller than the panel is left unscaled under the default policy
//! let unscaled = fit_dimensions((100, 50), (320, 172), FitPolicy::default());
//! assert_eq!(unscaled, (100, 50));
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::image::RgbImage;

/// Policy for fitting a source image to the panel's visible resolution
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPolicy {
    /// Preserve the source aspect ratio (uniform scale)
    pub keep_aspect: bool,
    /// Allow enlarging images smaller than the panel
    pub allow_upscale: bool,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            keep_aspect: true,
            allow_upscale: false,
        }
    }
}

/// Compute the fitted dimensions for a source image
///
/// - Source equal to target passes through unchanged.
/// - With `keep_aspect` disabled, the image resizes directly to the target
///   (non-uniform scale).
/// - Otherwise the image scales uniformly by `min(W/srcW, H/srcH)`; when
///   that ratio is >= 1 and upscaling is disallowed, the image is left
///   unscaled. Scaled axes are floored and clamped to at least one pixel.
pub fn fit_dimensions(src: (u16, u16), target: (u16, u16), policy: FitPolicy) -> (u16, u16) {
    let (src_w, src_h) = src;
    let (target_w, target_h) = target;

    if src == target {
        return src;
    }
    if !policy.keep_aspect {
        return target;
    }

    let fits = src_w <= target_w && src_h <= target_h;
    if fits && !policy.allow_upscale {
        return src;
    }

    // min(W/srcW, H/srcH) without floating point: the X axis binds when
    // W/srcW <= H/srcH, i.e. W*srcH <= H*srcW.
    let x_binds =
        u32::from(target_w) * u32::from(src_h) <= u32::from(target_h) * u32::from(src_w);
    if x_binds {
        let scaled_h = (u32::from(src_h) * u32::from(target_w) / u32::from(src_w)) as u16;
        (target_w, scaled_h.max(1))
    } else {
        let scaled_w = (u32::from(src_w) * u32::from(target_h) / u32::from(src_h)) as u16;
        (scaled_w.max(1), target_h)
    }
}

/// Resample an image to new dimensions with nearest-neighbor sampling
///
/// Returns a new interleaved RGB888 buffer of `width * height * 3` bytes.
#[cfg(feature = "alloc")]
pub fn resize_nearest(image: &RgbImage<'_>, width: u16, height: u16) -> Vec<u8> {
    let src_w = usize::from(image.width());
    let src_h = usize::from(image.height());
    let dst_w = usize::from(width);
    let dst_h = usize::from(height);
    let src = image.data();

    let mut out = Vec::with_capacity(dst_w * dst_h * 3);
    for y in 0..dst_h {
        let src_y = y * src_h / dst_h;
        let row = src_y * src_w * 3;
        for x in 0..dst_w {
            let src_x = x * src_w / dst_w;
            let pixel = row + src_x * 3;
            out.extend_from_slice(&src[pixel..pixel + 3]);
        }
    }
    out
}
