use std::cmp::Ordering;

/// Values that [`sort_array`] knows how to order: numbers and strings.
pub trait Sortable {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sortable_ord {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_sortable_float {
    ($($t:ty),*) => {
        $(
            impl Sortable for $t {
                /// NaN is considered equal to everything, leaving it where it was.
                fn compare(&self, other: &Self) -> Ordering {
                    self.partial_cmp(other).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

impl_sortable_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sortable_ord!(str, String, char);
impl_sortable_float!(f32, f64);

impl<S: Sortable + ?Sized> Sortable for &S {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

/// Returns a sorted copy of `items`, leaving the original untouched. Numbers sort ascending and
/// strings sort lexicographically. The sort is stable.
///
/// # Examples
/// ```
/// # use generic_containers::generics::sort_array;
/// let words = ["pear", "apple", "fig"];
/// assert_eq!(sort_array(&words), ["apple", "fig", "pear"]);
/// assert_eq!(words, ["pear", "apple", "fig"]);
///
/// assert_eq!(sort_array(&[3.5, -1.0, 2.0]), [-1.0, 2.0, 3.5]);
/// ```
pub fn sort_array<T: Sortable + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(Sortable::compare);
    sorted
}
