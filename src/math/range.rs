//! Linear range conversions.

/// Maps `value` from `[min, max]` onto `[0, 1]`.
///
/// The result is not clamped, and `min == max` yields NaN or infinity.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::range_to_01;
///
/// assert_eq!(range_to_01(15.0, 10.0, 20.0), 0.5);
/// assert_eq!(range_to_01(30.0, 10.0, 20.0), 2.0);
/// assert!(range_to_01(1.0, 1.0, 1.0).is_nan());
/// ```
pub fn range_to_01(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Remaps `value` from `[from1, to1]` onto `[from2, to2]`.
///
/// Same contract as [`range_to_01`]: no clamping, no guard against an
/// empty source range.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::remap_range;
///
/// assert_eq!(remap_range(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
/// assert_eq!(remap_range(0.25, 0.0, 1.0, 1.0, -1.0), 0.5);
/// ```
pub fn remap_range(value: f32, from1: f32, to1: f32, from2: f32, to2: f32) -> f32 {
    (value - from1) / (to1 - from1) * (to2 - from2) + from2
}
