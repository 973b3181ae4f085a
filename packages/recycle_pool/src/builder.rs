use std::any::type_name;
use std::fmt;

use crate::RecyclePool;

/// Default number of elements manufactured eagerly when a pool is built.
pub(crate) const DEFAULT_INITIAL_ALLOCATION: usize = 40;

/// Default number of elements manufactured per growth step.
pub(crate) const DEFAULT_ALLOCATION_INCREMENT: usize = 5;

/// Builder for creating an instance of [`RecyclePool`].
///
/// You only need to use this builder if you want to customize the pool
/// configuration. The default configuration used by [`RecyclePool::new()`][1]
/// is sufficient for most use cases.
///
/// # Examples
///
/// ```
/// use recycle_pool::RecyclePool;
///
/// let mut pool = RecyclePool::builder(|| vec![0_u8; 4096])
///     .name("scratch buffers")
///     .initialize(|buffer, _: &()| buffer.clear())
///     .initial_allocation(8)
///     .allocation_increment(2)
///     .build();
///
/// assert_eq!(pool.total_instances(), 8);
/// ```
///
/// [1]: RecyclePool::new
#[must_use]
pub struct RecyclePoolBuilder<T, A = ()> {
    label: Option<String>,
    factory: Box<dyn FnMut() -> T>,
    initialize: Box<dyn FnMut(&mut T, &A)>,
    initial_allocation: usize,
    allocation_increment: usize,
}

impl<T, A> fmt::Debug for RecyclePoolBuilder<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclePoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("label", &self.label)
            .field("initial_allocation", &self.initial_allocation)
            .field("allocation_increment", &self.allocation_increment)
            .finish_non_exhaustive()
    }
}

impl<T, A> RecyclePoolBuilder<T, A> {
    pub(crate) fn new(factory: Box<dyn FnMut() -> T>) -> Self {
        Self {
            label: None,
            factory,
            initialize: Box::new(|_element, _options| {}),
            initial_allocation: DEFAULT_INITIAL_ALLOCATION,
            allocation_increment: DEFAULT_ALLOCATION_INCREMENT,
        }
    }

    /// Sets the human-readable label of the pool.
    ///
    /// The pool's final name combines the label with a process-unique sequence
    /// number, e.g. `scratch buffers (pool #7)`. When no label is set, the name
    /// is just `pool #7`.
    pub fn name(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the initializer applied to every element as it is checked out.
    ///
    /// The initializer receives the element and the options value passed to
    /// [`get()`][RecyclePool::get]; it is responsible for clearing any state
    /// left over from the element's previous checkout. Defaults to doing
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::builder(String::new)
    ///     .initialize(|element, prefix: &&str| {
    ///         element.clear();
    ///         element.push_str(prefix);
    ///     })
    ///     .build();
    ///
    /// let element = pool.get(&"item-");
    /// assert_eq!(*element.borrow(), "item-");
    /// ```
    pub fn initialize(mut self, initialize: impl FnMut(&mut T, &A) + 'static) -> Self {
        self.initialize = Box::new(initialize);
        self
    }

    /// Sets the number of elements manufactured eagerly by [`build()`][1].
    ///
    /// Defaults to 40. An explicit 0 is honored: the pool starts empty and
    /// manufactures its first elements on the first checkout.
    ///
    /// [1]: Self::build
    pub fn initial_allocation(mut self, count: usize) -> Self {
        self.initial_allocation = count;
        self
    }

    /// Sets the number of elements manufactured per growth step when a
    /// checkout finds the free list empty.
    ///
    /// Defaults to 5. An explicit 0 is honored and produces a fixed-capacity
    /// pool that cannot grow past its initial allocation; see
    /// [`get()`][RecyclePool::get] and [`try_get()`][RecyclePool::try_get]
    /// for how exhaustion surfaces.
    pub fn allocation_increment(mut self, count: usize) -> Self {
        self.allocation_increment = count;
        self
    }

    /// Builds the pool with the specified configuration.
    ///
    /// Draws a process-unique pool id for naming, then synchronously invokes
    /// the factory once per element of the initial allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool: RecyclePool<u32> = RecyclePool::builder(|| 0).build();
    /// assert_eq!(pool.total_instances(), 40);
    /// ```
    #[must_use]
    pub fn build(self) -> RecyclePool<T, A> {
        RecyclePool::new_inner(
            self.label,
            self.factory,
            self.initialize,
            self.initial_allocation,
            self.allocation_increment,
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let builder: RecyclePoolBuilder<u32> = RecyclePoolBuilder::new(Box::new(|| 0));

        assert!(builder.label.is_none());
        assert_eq!(builder.initial_allocation, DEFAULT_INITIAL_ALLOCATION);
        assert_eq!(builder.allocation_increment, DEFAULT_ALLOCATION_INCREMENT);
    }

    #[test]
    fn setters_override_defaults() {
        let builder: RecyclePoolBuilder<u32> = RecyclePoolBuilder::new(Box::new(|| 0))
            .name("widgets")
            .initial_allocation(3)
            .allocation_increment(1);

        assert_eq!(builder.label.as_deref(), Some("widgets"));
        assert_eq!(builder.initial_allocation, 3);
        assert_eq!(builder.allocation_increment, 1);
    }

    #[test]
    fn explicit_zero_initial_allocation_is_honored() {
        let pool: RecyclePool<u32> = RecyclePoolBuilder::new(Box::new(|| 0))
            .initial_allocation(0)
            .build();

        assert_eq!(pool.total_instances(), 0);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn debug_output_names_item_type() {
        let builder: RecyclePoolBuilder<u32> =
            RecyclePoolBuilder::new(Box::new(|| 0)).name("widgets");
        let output = format!("{builder:?}");

        assert!(output.contains("u32"));
        assert!(output.contains("widgets"));
    }
}
