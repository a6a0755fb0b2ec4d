//! Circular angle arithmetic for panchangam calculations.
//!
//! All ecliptic longitudes and longitude-derived angles (elongation,
//! Sun+Moon sum) are circular values in degrees. Every other crate in the
//! workspace compares angles only through the two primitives here, never
//! through bare modulo or inequality code of its own.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Whether `target` lies on the clockwise arc from `start` to `end`,
/// endpoints inclusive.
///
/// All three angles are normalized first. When `start > end` the arc wraps
/// through 0 degrees.
pub fn is_between(target: f64, start: f64, end: f64) -> bool {
    let target = normalize_360(target);
    let start = normalize_360(start);
    let end = normalize_360(end);

    if start <= end {
        target >= start && target <= end
    } else {
        target >= start || target <= end
    }
}
