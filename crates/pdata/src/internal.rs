//! Shared storage behind the views.
//!
//! A view never owns its data directly. It holds a [`Handle`] into storage
//! that may be shared with its parent and with other views of the same
//! record, so a mutation through any of them is visible through all.

use std::cell::RefCell;
use std::rc::Rc;

use prost::encoding::{encoded_len_varint, key_len};

/// Reference-counted, interior-mutable storage cell.
pub(crate) type Shared<T> = Rc<RefCell<T>>;

pub(crate) fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Location of a record a view points at.
pub(crate) enum Handle<T> {
    /// The record has its own allocation.
    Shared(Shared<T>),
    /// The record is stored inline at `index` of a sequence buffer.
    Element { slice: Shared<Vec<T>>, index: usize },
}

impl<T> Handle<T> {
    /// # Panics
    ///
    /// Panics if an element handle outlived its element, e.g. after the
    /// sequence was shrunk below `index`.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self {
            Handle::Shared(orig) => f(&*orig.borrow()),
            Handle::Element { slice, index } => {
                let elements = slice.borrow();
                match elements.get(*index) {
                    Some(orig) => f(orig),
                    None => stale_element(*index, elements.len()),
                }
            }
        }
    }

    /// # Panics
    ///
    /// Same as [`Handle::read`].
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        match self {
            Handle::Shared(orig) => f(&mut *orig.borrow_mut()),
            Handle::Element { slice, index } => {
                let mut elements = slice.borrow_mut();
                let len = elements.len();
                match elements.get_mut(*index) {
                    Some(orig) => f(orig),
                    None => stale_element(*index, len),
                }
            }
        }
    }

    /// True when both handles refer to the same record.
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Handle::Shared(a), Handle::Shared(b)) => Rc::ptr_eq(a, b),
            (
                Handle::Element { slice: a, index: i },
                Handle::Element { slice: b, index: j },
            ) => Rc::ptr_eq(a, b) && i == j,
            _ => false,
        }
    }
}

#[cold]
fn stale_element(index: usize, len: usize) -> ! {
    panic!("stale element view: index {index} no longer exists in a sequence of length {len}")
}

/// Encoded size of a length-delimited field carrying `len` payload bytes.
pub(crate) fn message_encoded_len(tag: u32, len: usize) -> usize {
    key_len(tag) + encoded_len_varint(len as u64) + len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handles_alias() {
        let orig = shared(1);
        let a = Handle::Shared(Rc::clone(&orig));
        let b = Handle::Shared(Rc::clone(&orig));

        b.write(|v| *v = 5);

        assert_eq!(a.read(|v| *v), 5);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Handle::Shared(shared(5))));
    }

    #[test]
    fn test_element_handles_index_the_buffer() {
        let slice = shared(vec![1, 2, 3]);
        let second = Handle::Element {
            slice: Rc::clone(&slice),
            index: 1,
        };

        second.write(|v| *v = 20);

        assert_eq!(*slice.borrow(), vec![1, 20, 3]);
        assert!(second.ptr_eq(&Handle::Element {
            slice: Rc::clone(&slice),
            index: 1,
        }));
        assert!(!second.ptr_eq(&Handle::Element { slice, index: 2 }));
    }

    #[test]
    #[should_panic(expected = "stale element view: index 2 no longer exists in a sequence of length 1")]
    fn test_element_handle_after_truncation() {
        let slice = shared(vec![1, 2, 3]);
        let third = Handle::Element {
            slice: Rc::clone(&slice),
            index: 2,
        };

        slice.borrow_mut().truncate(1);

        third.read(|v| *v);
    }

    #[test]
    #[should_panic(expected = "stale element view")]
    fn test_element_handle_write_after_truncation() {
        let slice = shared(vec![1, 2]);
        let second = Handle::Element {
            slice: Rc::clone(&slice),
            index: 1,
        };

        slice.borrow_mut().clear();

        second.write(|v| *v = 7);
    }

    #[test]
    fn test_message_encoded_len() {
        assert_eq!(message_encoded_len(1, 0), 2);
        assert_eq!(message_encoded_len(15, 200), 1 + 2 + 200);
        assert_eq!(message_encoded_len(16, 3), 2 + 1 + 3);
    }
}
