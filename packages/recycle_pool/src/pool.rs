use std::any::type_name;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Error, Pooled, RecyclePoolBuilder};

/// Global counter for generating unique pool IDs.
static POOL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a unique pool ID.
fn generate_pool_id() -> u64 {
    POOL_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// An object pool of unbounded size that recycles expensive-to-construct elements.
///
/// The pool composes two injected behaviors: a *factory* that manufactures a new
/// element, and an *initializer* that resets an element before every checkout.
/// Elements are handed out as [`Pooled<T>`] handles and returned with
/// [`free()`][Self::free]; returned elements are reused in LIFO order, so the
/// most recently freed element is the next one handed out.
///
/// The pool manufactures an initial batch of elements eagerly when built and
/// grows by a fixed increment whenever a checkout finds the free list empty.
/// Growth has no ceiling: a caller that never frees drives one growth step per
/// checkout. There is no shrink policy.
///
/// The initializer is the only reset mechanism. The pool does not clear an
/// element's state between checkouts; whatever the initializer does not reset
/// carries over from the previous checkout.
///
/// # Single-threaded design
///
/// The pool is designed for single-threaded use and is neither [`Send`] nor
/// [`Sync`]. All operations run synchronously to completion.
///
/// # Example
///
/// ```rust
/// use recycle_pool::RecyclePool;
///
/// let mut pool = RecyclePool::builder(|| Vec::<u8>::with_capacity(4096))
///     .name("scratch buffers")
///     .initialize(|buffer, _: &()| buffer.clear())
///     .initial_allocation(4)
///     .build();
///
/// let buffer = pool.get(&());
/// buffer.borrow_mut().extend_from_slice(b"payload");
///
/// // Done with it; hand it back for reuse.
/// pool.free(buffer);
///
/// // The recycled element comes back cleared by the initializer.
/// let buffer = pool.get(&());
/// assert!(buffer.borrow().is_empty());
/// ```
pub struct RecyclePool<T, A = ()> {
    /// Identifying label, combining the caller-supplied label (if any) with a
    /// process-unique sequence number.
    name: String,

    factory: Box<dyn FnMut() -> T>,
    initialize: Box<dyn FnMut(&mut T, &A)>,

    /// Count of elements ever manufactured by this pool. Monotonic; the
    /// difference between this and the free list length is the number of
    /// elements currently checked out.
    total_instances: usize,

    /// Number of elements manufactured per growth step.
    allocation_increment: usize,

    /// Free list of elements not currently checked out, used as a stack.
    available: Vec<Pooled<T>>,
}

impl<T, A> RecyclePool<T, A> {
    pub(crate) fn new_inner(
        label: Option<String>,
        factory: Box<dyn FnMut() -> T>,
        initialize: Box<dyn FnMut(&mut T, &A)>,
        initial_allocation: usize,
        allocation_increment: usize,
    ) -> Self {
        let id = generate_pool_id();
        let name = match label {
            Some(label) => format!("{label} (pool #{id})"),
            None => format!("pool #{id}"),
        };

        let mut pool = Self {
            name,
            factory,
            initialize,
            total_instances: 0,
            allocation_increment,
            available: Vec::with_capacity(initial_allocation),
        };

        pool.allocate(initial_allocation);
        pool
    }

    /// Creates a new [`RecyclePool`] with the default configuration.
    ///
    /// The defaults are a generated name, a no-op initializer, an eager batch
    /// of 40 elements, and a growth increment of 5. The factory is invoked 40
    /// times before this returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::new(String::new);
    ///
    /// assert_eq!(pool.total_instances(), 40);
    /// assert_eq!(pool.len(), 40);
    ///
    /// let element = pool.get(&());
    /// assert_eq!(pool.len(), 39);
    /// # pool.free(element);
    /// ```
    #[must_use]
    pub fn new(factory: impl FnMut() -> T + 'static) -> Self {
        Self::builder(factory).build()
    }

    /// Starts building a new [`RecyclePool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the
    /// defaults. The factory is required; everything else is optional.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let pool: RecyclePool<u32> = RecyclePool::builder(|| 0)
    ///     .initial_allocation(10)
    ///     .build();
    ///
    /// assert_eq!(pool.total_instances(), 10);
    /// ```
    pub fn builder(factory: impl FnMut() -> T + 'static) -> RecyclePoolBuilder<T, A> {
        RecyclePoolBuilder::new(Box::new(factory))
    }

    /// Manufactures `count` new elements and adds them to the free list.
    // A surviving mutant here only shows up as runaway memory growth.
    #[cfg_attr(test, mutants::skip)]
    fn allocate(&mut self, count: usize) {
        self.total_instances = self
            .total_instances
            .checked_add(count)
            .expect("total manufactured instances overflowed usize");

        for _ in 0..count {
            let element = (self.factory)();
            self.available.push(Pooled::new(element));
        }
    }

    /// Checks an element out of the pool, growing the pool first if the free
    /// list is empty.
    ///
    /// The element popped from the free list is the most recently freed (or
    /// most recently manufactured) one. The initializer runs with the element
    /// and `options` before this returns, so the returned element is always
    /// freshly initialized.
    ///
    /// # Panics
    ///
    /// Panics if the free list is empty and the pool's allocation increment is
    /// zero, or if the popped element is still mutably borrowed through a
    /// handle retained from an earlier checkout. Use
    /// [`try_get()`][Self::try_get] for a fallible variant of the former.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::builder(Vec::<u32>::new)
    ///     .initialize(|element, seed: &u32| {
    ///         element.clear();
    ///         element.push(*seed);
    ///     })
    ///     .initial_allocation(1)
    ///     .build();
    ///
    /// let element = pool.get(&7);
    /// assert_eq!(*element.borrow(), [7]);
    /// ```
    #[must_use]
    pub fn get(&mut self, options: &A) -> Pooled<T> {
        self.try_get(options)
            .expect("pool cannot satisfy checkout: free list is empty and the allocation increment is zero")
    }

    /// Fallible variant of [`get()`][Self::get].
    ///
    /// Returns [`Error::Exhausted`] when the free list is empty and the pool's
    /// allocation increment is zero. This only happens for pools explicitly
    /// configured as fixed-capacity via
    /// [`allocation_increment(0)`][RecyclePoolBuilder::allocation_increment].
    ///
    /// # Panics
    ///
    /// Panics if the popped element is still mutably borrowed through a handle
    /// retained from an earlier checkout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::builder(|| 0_u32)
    ///     .initial_allocation(1)
    ///     .allocation_increment(0)
    ///     .build();
    ///
    /// let only = pool.try_get(&()).unwrap();
    /// assert!(pool.try_get(&()).is_err());
    ///
    /// pool.free(only);
    /// assert!(pool.try_get(&()).is_ok());
    /// ```
    pub fn try_get(&mut self, options: &A) -> Result<Pooled<T>, Error> {
        if self.available.is_empty() {
            // One growth step per checkout, even though only one slot is needed.
            self.allocate(self.allocation_increment);
        }

        let Some(handle) = self.available.pop() else {
            return Err(Error::Exhausted {
                pool: self.name.clone(),
            });
        };

        (self.initialize)(&mut handle.borrow_mut(), options);

        Ok(handle)
    }

    /// Returns an element to the free list, making it available for reuse.
    ///
    /// Freeing is idempotent: if the element is already on the free list, this
    /// is a no-op, so a double free cannot put the same element up for
    /// checkout twice. The pool does not verify that the element was
    /// manufactured by this pool's factory.
    ///
    /// Freeing does not reset the element; any state it accumulated while
    /// checked out stays until the initializer runs on the next checkout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool = RecyclePool::builder(|| 0_u8)
    ///     .initial_allocation(1)
    ///     .build();
    ///
    /// let element = pool.get(&());
    /// assert_eq!(pool.len(), 0);
    ///
    /// // Freeing two handles to the same element lands it on the list once.
    /// pool.free(element.clone());
    /// pool.free(element);
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn free(&mut self, handle: Pooled<T>) {
        let already_present = self
            .available
            .iter()
            .any(|existing| Pooled::ptr_eq(existing, &handle));

        if !already_present {
            self.available.push(handle);
        }
    }

    /// Empties the free list, dropping the pool's handles to all elements not
    /// currently checked out.
    ///
    /// The total-instances count is not reset: elements checked out before the
    /// clear are still accounted for, and freeing them re-admits them to the
    /// pool. The factory, initializer, and name are untouched; the pool
    /// remains usable and grows again on the next checkout.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recycle_pool::RecyclePool;
    ///
    /// let mut pool: RecyclePool<u16> = RecyclePool::builder(|| 0_u16)
    ///     .initial_allocation(10)
    ///     .build();
    ///
    /// pool.clear();
    /// assert_eq!(pool.len(), 0);
    /// assert_eq!(pool.total_instances(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.available.clear();
    }

    /// The pool's name: the caller-supplied label (if any) combined with a
    /// process-unique sequence number.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of elements currently available for checkout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Whether the free list is empty.
    ///
    /// An empty pool is not exhausted unless its allocation increment is also
    /// zero; the next checkout simply triggers a growth step.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// The number of elements ever manufactured by this pool.
    ///
    /// The difference between this and [`len()`][Self::len] is the number of
    /// elements currently checked out.
    #[must_use]
    pub fn total_instances(&self) -> usize {
        self.total_instances
    }

    /// The number of elements manufactured per growth step.
    #[must_use]
    pub fn allocation_increment(&self) -> usize {
        self.allocation_increment
    }
}

impl<T, A> fmt::Display for RecyclePool<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} instances, {} available",
            self.name,
            self.total_instances,
            self.available.len()
        )
    }
}

impl<T, A> fmt::Debug for RecyclePool<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclePool")
            .field("name", &self.name)
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("total_instances", &self.total_instances)
            .field("allocation_increment", &self.allocation_increment)
            .field("available", &self.available.len())
            .finish_non_exhaustive()
    }
}
