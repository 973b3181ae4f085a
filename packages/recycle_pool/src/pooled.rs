use std::any::type_name;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// A shared handle to an element owned by a [`RecyclePool`][crate::RecyclePool].
///
/// Every element the pool manufactures lives behind one of these handles. The pool
/// keeps a handle for each element sitting in its free list; checking an element
/// out hands the handle to the caller, and [`free()`][crate::RecyclePool::free]
/// hands it back. Cloning a handle creates another reference to the same element,
/// which is how a caller can retain access to an element while returning it.
///
/// Identity of the underlying element is observable through [`ptr_eq()`][Self::ptr_eq]:
/// two handles compare equal exactly when they refer to the same pooled element,
/// regardless of the element's current contents.
///
/// # Single-threaded design
///
/// This type is designed for single-threaded use and is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use recycle_pool::RecyclePool;
///
/// let mut pool = RecyclePool::new(|| vec![0_u8; 1024]);
///
/// let buffer = pool.get(&());
/// buffer.borrow_mut().push(42);
///
/// // Clone to create an additional reference to the same element.
/// let same_buffer = buffer.clone();
/// assert!(recycle_pool::Pooled::ptr_eq(&buffer, &same_buffer));
/// ```
pub struct Pooled<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Pooled<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Immutably borrows the pooled element.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently mutably borrowed through any handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::new(|| String::from("fresh"));
    ///
    /// let element = pool.get(&());
    /// assert_eq!(*element.borrow(), "fresh");
    /// ```
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutably borrows the pooled element.
    ///
    /// # Panics
    ///
    /// Panics if the element is currently borrowed through any handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::new(Vec::<u32>::new);
    ///
    /// let element = pool.get(&());
    /// element.borrow_mut().push(1234);
    /// assert_eq!(element.borrow().len(), 1);
    /// ```
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Whether two handles refer to the same pooled element.
    ///
    /// Compares identity, not contents - two distinct elements with equal
    /// contents are not `ptr_eq`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::{Pooled, RecyclePool};
    ///
    /// let mut pool = RecyclePool::builder(|| 0_u64)
    ///     .initial_allocation(2)
    ///     .build();
    ///
    /// let first = pool.get(&());
    /// let second = pool.get(&());
    ///
    /// assert!(Pooled::ptr_eq(&first, &first.clone()));
    /// assert!(!Pooled::ptr_eq(&first, &second));
    /// # pool.free(first);
    /// # pool.free(second);
    /// ```
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl<T> Clone for Pooled<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pooled")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_not_impl_any;

    use super::*;

    assert_not_impl_any!(Pooled<u8>: Send, Sync);

    #[test]
    fn clone_refers_to_same_element() {
        let handle = Pooled::new(10_u32);
        let clone = handle.clone();

        assert!(Pooled::ptr_eq(&handle, &clone));

        *handle.borrow_mut() = 20;
        assert_eq!(*clone.borrow(), 20);
    }

    #[test]
    fn distinct_elements_are_not_ptr_eq() {
        let a = Pooled::new(5_u32);
        let b = Pooled::new(5_u32);

        assert!(!Pooled::ptr_eq(&a, &b));
    }

    #[test]
    fn debug_output_names_item_type() {
        let handle = Pooled::new(5_u32);
        let output = format!("{handle:?}");

        assert!(output.contains("u32"));
    }
}
