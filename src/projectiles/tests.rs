//! Projectiles domain: unit tests for the handle pool.

use super::pool::ObjectPool;

#[test]
fn test_acquire_up_to_capacity_then_none() {
    let mut pool = ObjectPool::with_capacity(6);
    for handle in 0u32..6 {
        assert!(pool.register(handle));
    }
    assert!(!pool.register(99));

    let mut acquired = Vec::new();
    for _ in 0..6 {
        assert!(pool.can_acquire());
        acquired.push(pool.acquire().expect("idle slot available"));
    }

    assert_eq!(pool.active_count(), 6);
    assert!(!pool.can_acquire());
    assert_eq!(pool.acquire(), None);
}

#[test]
fn test_active_count_never_exceeds_capacity() {
    let mut pool = ObjectPool::with_capacity(6);
    for handle in 0u32..6 {
        pool.register(handle);
    }

    // Arbitrary interleaving of acquires and releases.
    let mut held = Vec::new();
    for round in 0..50u32 {
        if round % 3 == 0 {
            if let Some(h) = held.pop() {
                pool.release(h);
            }
        } else if let Some(h) = pool.acquire() {
            held.push(h);
        }
        assert!(pool.active_count() <= pool.capacity());
        assert_eq!(pool.can_acquire(), pool.active_count() < pool.capacity());
    }
}

#[test]
fn test_release_returns_slot_for_reuse() {
    let mut pool = ObjectPool::with_capacity(2);
    pool.register(10u32);
    pool.register(20u32);

    let a = pool.acquire().unwrap();
    let _b = pool.acquire().unwrap();
    assert!(!pool.can_acquire());

    assert!(pool.release(a));
    assert!(pool.can_acquire());
    assert!(pool.acquire().is_some());
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn test_idempotent_release() {
    let mut pool = ObjectPool::with_capacity(3);
    for handle in 0u32..3 {
        pool.register(handle);
    }

    let h = pool.acquire().unwrap();
    assert!(pool.release(h));
    let count = pool.active_count();

    // Releasing an already-idle handle changes nothing.
    assert!(!pool.release(h));
    assert_eq!(pool.active_count(), count);

    // Releasing a handle the pool never owned changes nothing either.
    assert!(!pool.release(77));
    assert_eq!(pool.active_count(), count);
}

#[test]
fn test_is_active_tracks_slot_state() {
    let mut pool = ObjectPool::with_capacity(1);
    pool.register(5u32);

    assert!(!pool.is_active(5));
    let h = pool.acquire().unwrap();
    assert!(pool.is_active(h));
    pool.release(h);
    assert!(!pool.is_active(h));
}
