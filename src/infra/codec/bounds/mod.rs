//! Range sanitizing for decoded physical readings.

/// Clamp `value` into `[lower, upper]`.
///
/// A malformed range (`lower > upper`) is not an error: `value` comes back
/// untouched. Incomparable inputs (a `NaN` value) also pass through, since
/// neither bound compares below or above them.
///
/// ```
/// use canbus_protocol::bounded_value;
///
/// assert_eq!(bounded_value(0, 10, 15), 10);
/// assert_eq!(bounded_value(0, 10, -5), 0);
/// assert_eq!(bounded_value(0, 10, 5), 5);
/// assert_eq!(bounded_value(10, 0, 7), 7);
/// ```
#[inline]
pub fn bounded_value<T: PartialOrd>(lower: T, upper: T, value: T) -> T {
    if lower > upper {
        return value;
    }
    if value < lower {
        return lower;
    }
    if value > upper {
        return upper;
    }
    value
}
