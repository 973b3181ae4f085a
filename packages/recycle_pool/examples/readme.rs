//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to use `RecyclePool` for element recycling.

use recycle_pool::RecyclePool;

fn main() {
    // A pool of scratch buffers, cleared on every checkout.
    let mut pool = RecyclePool::builder(|| Vec::<u8>::with_capacity(4096))
        .name("scratch buffers")
        .initialize(|buffer, _: &()| buffer.clear())
        .initial_allocation(8)
        .allocation_increment(2)
        .build();

    let buffer = pool.get(&());
    buffer.borrow_mut().extend_from_slice(b"some payload");

    // Hand the buffer back; the next checkout reuses it.
    pool.free(buffer);

    let buffer = pool.get(&());
    assert!(buffer.borrow().is_empty());

    println!("{pool}");
}
