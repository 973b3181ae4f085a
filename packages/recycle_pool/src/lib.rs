//! This package provides [`RecyclePool`], a generic object pool that manufactures
//! expensive-to-construct elements up front and recycles them instead of letting
//! them be discarded.
//!
//! The pool is parameterized by two injected behaviors: a *factory* that produces
//! a new element, and an *initializer* that resets an element (together with
//! caller-supplied options) before every checkout. The pool itself is fully
//! generic over the element type - it never inspects what it stores.
//!
//! # Features
//!
//! - **Eager initial allocation**: a configurable batch of elements is
//!   manufactured when the pool is built.
//! - **Grow-on-demand**: when the free list is empty, the pool grows by a
//!   configurable fixed increment; growth has no ceiling.
//! - **LIFO reuse**: the most recently freed element is the next one handed
//!   out, keeping recently-touched elements warm.
//! - **Idempotent free**: returning the same element twice is a no-op, so a
//!   double free can never put an element up for checkout twice.
//! - **Caller-defined recycling**: the initializer is the only reset mechanism;
//!   the pool never clears element state on its own.
//! - **Unique naming**: every pool gets a process-unique name for diagnostics,
//!   with an optional human-readable label.
//!
//! # Example
//!
//! ```rust
//! use recycle_pool::RecyclePool;
//!
//! // A pool of scratch buffers, cleared on every checkout.
//! let mut pool = RecyclePool::builder(|| Vec::<u8>::with_capacity(4096))
//!     .name("scratch buffers")
//!     .initialize(|buffer, _: &()| buffer.clear())
//!     .initial_allocation(8)
//!     .allocation_increment(2)
//!     .build();
//!
//! let buffer = pool.get(&());
//! buffer.borrow_mut().extend_from_slice(b"some payload");
//!
//! // Hand the buffer back; the next checkout reuses it.
//! pool.free(buffer);
//!
//! let buffer = pool.get(&());
//! assert!(buffer.borrow().is_empty());
//! ```
//!
//! # Thread safety
//!
//! The pool and its [`Pooled<T>`] handles are single-threaded types - neither
//! [`Send`] nor [`Sync`]. The design assumes a single logical owner drives all
//! pool operations; a surrounding system that wants to share a pool across
//! threads must serialize access itself.

mod builder;
mod error;
mod pool;
mod pooled;

pub use builder::RecyclePoolBuilder;
pub use error::Error;
pub use pool::RecyclePool;
pub use pooled::Pooled;
