/// Pointer position as a percentage of the viewport, `(0, 0)` top-left to
/// `(100, 100)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRatio {
    pub x: f64,
    pub y: f64,
}

impl PointerRatio {
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };
}

impl Default for PointerRatio {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Falls back to the centre while the viewport size is unknown (zero, or
/// infinite before the first measurement).
pub fn pointer_ratio(x: f64, y: f64, width: f64, height: f64) -> PointerRatio {
    let measured = |len: f64| len.is_finite() && len > 0.0;
    if !measured(width) || !measured(height) {
        return PointerRatio::CENTER;
    }
    PointerRatio {
        x: (x / width * 100.0).clamp(0.0, 100.0),
        y: (y / height * 100.0).clamp(0.0, 100.0),
    }
}

/// Like [`pointer_ratio`], but stays centred until the pointer has reported
/// a position.
pub fn sampled_ratio(sample: Option<(f64, f64)>, width: f64, height: f64) -> PointerRatio {
    match sample {
        Some((x, y)) => pointer_ratio(x, y, width, height),
        None => PointerRatio::CENTER,
    }
}

/// Pixel translation for a decoration layer. The centre maps to no movement
/// and the edges to `±depth / 2`; a negative depth moves against the pointer.
pub fn layer_offset(ratio: PointerRatio, depth: f64) -> (f64, f64) {
    (
        (ratio.x - 50.0) / 100.0 * depth,
        (ratio.y - 50.0) / 100.0 * depth,
    )
}

/// CSS `transform` value for [`layer_offset`].
pub fn layer_transform(ratio: PointerRatio, depth: f64) -> String {
    let (dx, dy) = layer_offset(ratio, depth);
    format!("translate3d({dx:.2}px, {dy:.2}px, 0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_ratio_percent() {
        let r = pointer_ratio(480.0, 270.0, 1920.0, 1080.0);
        assert_eq!(r, PointerRatio { x: 25.0, y: 25.0 });
    }

    #[test]
    fn test_pointer_ratio_clamps_outside_viewport() {
        let r = pointer_ratio(-20.0, 3000.0, 1000.0, 1000.0);
        assert_eq!(r, PointerRatio { x: 0.0, y: 100.0 });
    }

    #[test]
    fn test_zero_viewport_is_centered() {
        assert_eq!(pointer_ratio(10.0, 10.0, 0.0, 600.0), PointerRatio::CENTER);
        assert_eq!(pointer_ratio(10.0, 10.0, 800.0, 0.0), PointerRatio::CENTER);
        assert_eq!(
            pointer_ratio(10.0, 10.0, f64::INFINITY, f64::INFINITY),
            PointerRatio::CENTER
        );
    }

    #[test]
    fn test_unsampled_pointer_is_centered() {
        assert_eq!(sampled_ratio(None, 1920.0, 1080.0), PointerRatio::CENTER);
        assert_eq!(
            sampled_ratio(Some((0.0, 0.0)), 1920.0, 1080.0),
            PointerRatio { x: 0.0, y: 0.0 }
        );
    }

    #[test]
    fn test_layer_offset() {
        assert_eq!(layer_offset(PointerRatio::CENTER, 24.0), (0.0, 0.0));
        assert_eq!(layer_offset(PointerRatio { x: 100.0, y: 0.0 }, 24.0), (12.0, -12.0));
        assert_eq!(layer_offset(PointerRatio { x: 100.0, y: 0.0 }, -24.0), (-12.0, 12.0));
    }

    #[test]
    fn test_layer_transform() {
        let css = layer_transform(PointerRatio { x: 75.0, y: 50.0 }, 10.0);
        assert_eq!(css, "translate3d(2.50px, 0.00px, 0)");
    }
}
