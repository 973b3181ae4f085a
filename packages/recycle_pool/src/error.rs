use thiserror::Error;

/// Errors that can occur when checking an element out of a pool.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The pool's free list is empty and its allocation increment is zero,
    /// so the checkout cannot be satisfied by growing the pool.
    #[error("{pool} is exhausted: no available instances and the allocation increment is zero")]
    Exhausted {
        /// Name of the pool that could not satisfy the checkout.
        pool: String,
    },
}
