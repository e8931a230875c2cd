use std::ops::Deref;
use std::slice;
use std::vec;

use super::{BoundedListError, CapacityExceeded, InvalidCapacity};

/// An append-only list which holds at most `max_size` items, fixed when the list is created.
///
/// Once full, the list rejects any further appends with [`CapacityExceeded`]. There is no way to
/// remove items, so a full list stays full for the rest of its life.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BoundedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(1)` |
/// | `append` | `O(1)`* |
/// | `len` | `O(1)` |
/// | `snapshot` | `O(n)` |
///
/// \* Amortized, the backing storage grows on demand rather than up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedList<T> {
    pub(crate) items: Vec<T>,
    pub(crate) max_size: usize,
}

impl<T> BoundedList<T> {
    /// Creates a new, empty BoundedList which will accept at most `max_size` items.
    ///
    /// The size is signed so that a negative request is reported as an error rather than being
    /// impossible to express.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `max_size` is zero or negative.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::bounded::BoundedList;
    /// let list = BoundedList::<u8>::new(3).unwrap();
    /// assert_eq!(list.max_size(), 3);
    /// assert!(BoundedList::<u8>::new(0).is_err());
    /// assert!(BoundedList::<u8>::new(-1).is_err());
    /// ```
    pub fn new(max_size: isize) -> Result<BoundedList<T>, InvalidCapacity> {
        if max_size <= 0 {
            return Err(InvalidCapacity { requested: max_size });
        }

        Ok(BoundedList {
            items: Vec::new(),
            max_size: max_size.unsigned_abs(),
        })
    }

    /// Creates a BoundedList with the provided `max_size` and appends every item from `iter`, in
    /// order.
    ///
    /// # Errors
    /// Returns [`BoundedListError::InvalidCapacity`] if `max_size` isn't positive, or
    /// [`BoundedListError::CapacityExceeded`] holding the first item that didn't fit.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::bounded::BoundedList;
    /// let list = BoundedList::from_iter_bounded(3, 1..=3).unwrap();
    /// assert_eq!(&*list, &[1, 2, 3]);
    ///
    /// let err = BoundedList::from_iter_bounded(2, 1..=3).unwrap_err();
    /// assert!(err.is_capacity_exceeded());
    /// ```
    pub fn from_iter_bounded<I>(max_size: isize, iter: I) -> Result<BoundedList<T>, BoundedListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = BoundedList::new(max_size)?;
        for item in iter {
            list.append(item)?;
        }
        Ok(list)
    }

    /// Appends `item` to the end of the list.
    ///
    /// # Errors
    /// Returns [`CapacityExceeded`] if the list already holds `max_size` items. The item is
    /// returned inside the error and the list is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::bounded::BoundedList;
    /// let mut list = BoundedList::new(1).unwrap();
    /// assert!(list.append("first").is_ok());
    ///
    /// let err = list.append("second").unwrap_err();
    /// assert_eq!(err.into_item(), "second");
    /// assert_eq!(&*list, &["first"]);
    /// ```
    pub fn append(&mut self, item: T) -> Result<(), CapacityExceeded<T>> {
        if self.is_full() {
            return Err(CapacityExceeded {
                max_size: self.max_size,
                item,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Returns the maximum number of items this list will ever hold.
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the number of items currently in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the list has reached its maximum size, meaning any further append will
    /// fail.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Returns the number of appends that will still succeed.
    pub fn remaining(&self) -> usize {
        self.max_size - self.items.len()
    }
}

impl<T: Clone> BoundedList<T> {
    /// Returns a copy of the current contents, in insertion order. The copy is owned by the
    /// caller and isn't affected by any later appends.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::bounded::BoundedList;
    /// let mut list = BoundedList::new(4).unwrap();
    /// list.append(1).unwrap();
    ///
    /// let mut snapshot = list.snapshot();
    /// snapshot.push(100);
    /// list.append(2).unwrap();
    ///
    /// assert_eq!(snapshot, [1, 100]);
    /// assert_eq!(list.snapshot(), [1, 2]);
    /// ```
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Deref for BoundedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> AsRef<[T]> for BoundedList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> IntoIterator for BoundedList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
