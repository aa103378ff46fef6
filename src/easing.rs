//! Easing curve shared by the fade and scroll animations.

/// Sinusoidal ease-in-out over `p` in `[0, 1]`: slow start, fast middle,
/// slow settle. Input outside the range is clamped.
pub fn swing(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    0.5 - (p * std::f64::consts::PI).cos() / 2.0
}
