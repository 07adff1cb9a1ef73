// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numeric dimension handling: rounding, downscaling and padding.
//!
//! Everything here is deterministic. All emitted dimensions and viewBox
//! coordinates pass through the same rounding so repeated runs produce
//! identical output.

use svgtypes::ViewBox;

/// A four-sided padding, in final output units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[allow(missing_docs)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    /// Constructs a padding with the same value on all four sides.
    pub fn uniform(value: f64) -> Padding {
        Padding { top: value, right: value, bottom: value, left: value }
    }

    pub(crate) fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub(crate) fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Defines whether the configured padding lives outside or inside
/// a shape's declared size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BoxSizing {
    /// Padding is added around the content. The effective size checked
    /// against the maximum dimensions is `size + padding`.
    Content,
    /// Padding is carved out of the declared box. The declared size
    /// already accounts for it.
    Padding,
}

impl Default for BoxSizing {
    fn default() -> Self {
        BoxSizing::Content
    }
}

/// Rounds a value half away from zero at `precision` decimal places.
pub(crate) fn round_precision(value: f64, precision: u8) -> f64 {
    let factor = 10f64.powi(i32::from(precision));
    (value * factor).round() / factor
}

/// Writes a rounded number the way SVG attributes expect it,
/// without a trailing fractional zero.
pub(crate) fn write_num(value: f64, precision: u8) -> String {
    format!("{}", round_precision(value, precision))
}

pub(crate) struct Downscale {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

/// Limits dimensions to the configured maximums.
///
/// Returns the scaled width/height and the applied uniform scale factor.
/// The factor is needed later to translate padding, which is specified in
/// final output units, back into the original viewBox coordinate system.
pub(crate) fn limit_dimensions(
    width: f64,
    height: f64,
    padding: &Padding,
    box_sizing: BoxSizing,
    max_width: f64,
    max_height: f64,
    precision: u8,
) -> Downscale {
    let mut result = Downscale { width, height, scale: 1.0 };

    if width <= 0.0 || height <= 0.0 {
        return result;
    }

    // Padding counts against the maximum only when it sits outside
    // the declared box.
    let (extra_w, extra_h) = match box_sizing {
        BoxSizing::Content => (padding.horizontal(), padding.vertical()),
        BoxSizing::Padding => (0.0, 0.0),
    };

    if width + extra_w > max_width || height + extra_h > max_height {
        // Padding is re-added after scaling, so the scale target is
        // the maximum minus the padding in both box models.
        let adj_max_w = (max_width - padding.horizontal()).max(0.0);
        let adj_max_h = (max_height - padding.vertical()).max(0.0);

        let scale = f64::min(adj_max_w / width, adj_max_h / height);

        // The clamp guards against a rounding overshoot.
        result.width = round_precision(width * scale, precision).min(adj_max_w);
        result.height = round_precision(height * scale, precision).min(adj_max_h);
        result.scale = scale;
    }

    result
}

/// Expands a viewBox outward by the padding, translated into the
/// viewBox's coordinate system via the downscale factor.
///
/// Must run after the downscale: padding is specified in final output
/// units, while the viewBox keeps the original coordinates.
pub(crate) fn pad_view_box(vb: &mut ViewBox, padding: &Padding, scale: f64, precision: u8) {
    vb.x = round_precision(vb.x - padding.left / scale, precision);
    vb.y = round_precision(vb.y - padding.top / scale, precision);
    vb.w = round_precision(vb.w + padding.horizontal() / scale, precision);
    vb.h = round_precision(vb.h + padding.vertical() / scale, precision);
}
