use crate::collections::traits::Lengthwise;

/// Returns `value` unchanged.
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns `value` unchanged. Exists alongside [`identity`] as the entry point for values that
/// are about to be processed further by the caller.
pub const fn process_value<T>(value: T) -> T {
    value
}

/// Returns `value` unchanged, accepting only values with a length.
///
/// # Examples
/// ```
/// # use generic_containers::generics::logging_identity;
/// assert_eq!(logging_identity("abc"), "abc");
/// assert_eq!(logging_identity(vec![1, 2]), [1, 2]);
/// ```
pub fn logging_identity<T: Lengthwise>(value: T) -> T {
    value
}

pub const fn first_element<T>(items: &[T]) -> Option<&T> {
    items.first()
}

pub const fn last_element<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Returns the smallest value in `zones`, or None if there are no zones at all.
///
/// If any zone is NaN, the result is NaN.
///
/// # Examples
/// ```
/// # use generic_containers::generics::min_zone_value;
/// assert_eq!(min_zone_value(&[3.0, -1.5, 2.0]), Some(-1.5));
/// assert_eq!(min_zone_value(&[]), None);
/// assert!(min_zone_value(&[1.0, f64::NAN]).is_some_and(f64::is_nan));
/// ```
pub fn min_zone_value(zones: &[f64]) -> Option<f64> {
    zones.iter().copied().reduce(|min, zone| {
        if min.is_nan() || zone.is_nan() {
            f64::NAN
        } else {
            min.min(zone)
        }
    })
}
