//! Layer colors: a hue ramp from red at the base to blue at the win line.

use crate::fb::Rgb;

const HUE_SPAN: f64 = 220.0;
const SATURATION: f64 = 0.80;
const LIGHTNESS: f64 = 0.55;

/// Color of the block on `layer`, given the layer count needed to win.
pub fn level_color(layer: u32, win_target: u32) -> Rgb {
    let ratio = if win_target == 0 {
        1.0
    } else {
        (layer as f64 / win_target as f64).clamp(0.0, 1.0)
    };
    let hue = (HUE_SPAN * ratio).round();
    hsl_to_rgb(hue, SATURATION, LIGHTNESS)
}

/// HSL (hue in degrees, saturation/lightness in `0..=1`) to 8-bit RGB.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_layer_is_red() {
        // hsl(0, 80%, 55%)
        assert_eq!(level_color(0, 20), Rgb::new(232, 48, 48));
    }

    #[test]
    fn win_layer_is_blue() {
        // hsl(220, 80%, 55%)
        assert_eq!(level_color(20, 20), Rgb::new(48, 110, 232));
        // Clamped past the target.
        assert_eq!(level_color(25, 20), level_color(20, 20));
    }

    #[test]
    fn midpoint_is_green() {
        // hue 110
        let c = level_color(10, 20);
        assert!(c.g > c.r && c.g > c.b);
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
    }
}
