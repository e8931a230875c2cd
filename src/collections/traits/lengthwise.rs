/// Anything with a length.
pub trait Lengthwise {
    fn length(&self) -> usize;
}

impl<L: Lengthwise + ?Sized> Lengthwise for &L {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Lengthwise for str {
    /// The length in bytes, not characters.
    fn length(&self) -> usize {
        self.len()
    }
}

impl Lengthwise for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Lengthwise for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Lengthwise for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Lengthwise for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "bounded")]
impl<T> Lengthwise for crate::collections::bounded::BoundedList<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "stack")]
impl<T> Lengthwise for crate::collections::stack::Stack<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "queue")]
impl<T> Lengthwise for crate::collections::queue::Queue<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "manager")]
impl<T> Lengthwise for crate::collections::manager::GenericArrayManager<T> {
    fn length(&self) -> usize {
        self.len()
    }
}
