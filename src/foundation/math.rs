pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `Some(aspect)` when it is usable as a `width / height` ratio.
pub(crate) fn usable_aspect(aspect: f64) -> Option<f64> {
    (aspect.is_finite() && aspect > 0.0).then_some(aspect)
}

/// Aspect ratio of a `width x height` raster, if both are non-zero.
pub(crate) fn aspect_of(width: u32, height: u32) -> Option<f64> {
    if height == 0 {
        return None;
    }
    usable_aspect(f64::from(width) / f64::from(height))
}

/// `max(1, round(width / aspect))`, or `None` when it does not fit a `u32`.
pub(crate) fn height_for_aspect(width: u32, aspect: f64) -> Option<u32> {
    let h = (f64::from(width) / aspect).round();
    if !h.is_finite() || h > f64::from(u32::MAX) {
        return None;
    }
    Some((h as u32).max(1))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
