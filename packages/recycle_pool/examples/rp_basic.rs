//! Basic usage of the `recycle_pool` crate:
//!
//! * Building a pool with a factory and an initializer.
//! * Checking elements out.
//! * Returning elements for reuse.
//! * Clearing the free list.

use recycle_pool::RecyclePool;

fn main() {
    // A pool of scratch buffers. The factory runs 8 times right here; the
    // initializer runs on every checkout and clears whatever the previous
    // user left behind.
    let mut pool = RecyclePool::builder(|| Vec::<u8>::with_capacity(4096))
        .name("scratch buffers")
        .initialize(|buffer, _: &()| buffer.clear())
        .initial_allocation(8)
        .allocation_increment(2)
        .build();

    println!("After build: {pool}");

    // Check a buffer out and use it. The handle is a shared reference to the
    // pooled element; borrow it to read or write.
    let buffer = pool.get(&());
    buffer.borrow_mut().extend_from_slice(b"request payload");
    println!("After one checkout: {pool}");

    // Hand it back. The most recently freed element is the next one handed
    // out, so this exact buffer is reused immediately.
    pool.free(buffer);

    let buffer = pool.get(&());
    println!(
        "Recycled buffer is empty again: {} bytes",
        buffer.borrow().len()
    );
    pool.free(buffer);

    // Draining the free list makes the pool grow by its increment.
    let all: Vec<_> = (0..9).map(|_| pool.get(&())).collect();
    println!("After draining past the initial batch: {pool}");

    for buffer in all {
        pool.free(buffer);
    }

    // Clearing drops the pool's handles to everything not checked out; the
    // pool stays usable and grows again on demand.
    pool.clear();
    println!("After clear: {pool}");
}
