/// Distance between two hues on the color wheel.
pub(crate) fn hue_gap(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn hue_gap_wraps_around_zero() {
    assert_eq!(hue_gap(359.0, 1.0), 2.0);
    assert_eq!(hue_gap(10.0, 190.0), 180.0);
    assert_eq!(hue_gap(42.0, 42.0), 0.0);
}
