//! Maps escape counts to colors.  Escapees ride a fully saturated hue
//! wheel whose period is 255 counts, independent of the iteration
//! limit; deep zooms with high limits therefore show repeating color
//! bands, which is the intended look.  A count of 0 is the interior
//! sentinel and is always solid black, never a product of the hue
//! formula.

/// Convert an escape count to an RGB triple.  0 is interior black;
/// any other count selects a hue with full saturation and value, with
/// each channel truncated to an integer.
pub fn escape_color(count: usize) -> [u8; 3] {
    if count == 0 {
        return [0, 0, 0];
    }
    let (r, g, b) = hsv_to_rgb((count as f64) / 255.0, 1.0, 1.0);
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Standard sector-based HSV to RGB conversion over [0,1] channels.
/// Hues at or above 1.0 wrap around the wheel, so a count of exactly
/// 255 comes out pure red rather than colliding with interior black.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let sector = h * 6.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (i as u64) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, q),
        _ => (q, p, v),
    }
}
