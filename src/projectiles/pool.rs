//! Projectiles domain: fixed-capacity reusable handle pool.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Fixed-capacity pool of reusable handles. Slots are preallocated through
/// `register` and cycle between idle and active; the pool never grows past
/// its capacity and never forgets a handle.
///
/// The active-order queue tracks fill/drain order for inspection only; any
/// idle slot may be reused, not necessarily the oldest.
#[derive(Debug, Default)]
pub struct ObjectPool<H: Copy + PartialEq> {
    capacity: usize,
    slots: Vec<Slot<H>>,
    active_order: VecDeque<H>,
}

#[derive(Debug)]
struct Slot<H> {
    handle: H,
    active: bool,
}

impl<H: Copy + PartialEq> ObjectPool<H> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            active_order: VecDeque::with_capacity(capacity),
        }
    }

    /// Add a preallocated instance to the pool. Returns false (and keeps
    /// the pool unchanged) once capacity slots are registered.
    pub fn register(&mut self, handle: H) -> bool {
        if self.slots.len() >= self.capacity {
            return false;
        }
        self.slots.push(Slot {
            handle,
            active: false,
        });
        true
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn active_count(&self) -> usize {
        self.active_order.len()
    }

    pub fn can_acquire(&self) -> bool {
        self.active_count() < self.slots.len()
    }

    pub fn is_active(&self, handle: H) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.handle == handle && slot.active)
    }

    /// Claim an idle instance, marking it active. Returns `None` at
    /// capacity; callers are expected to check `can_acquire` first.
    pub fn acquire(&mut self) -> Option<H> {
        let slot = self.slots.iter_mut().find(|slot| !slot.active)?;
        slot.active = true;
        let handle = slot.handle;
        self.active_order.push_back(handle);
        Some(handle)
    }

    /// Return an instance to the pool. Releasing a handle that is not
    /// currently active is a no-op, not an error; returns whether the
    /// handle actually transitioned back to idle.
    pub fn release(&mut self, handle: H) -> bool {
        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.handle == handle && slot.active)
        else {
            return false;
        };
        slot.active = false;
        self.active_order.retain(|h| *h != handle);
        true
    }
}

/// The session's projectile pool. Owned by the plugin, filled once at
/// startup, and the only path through which projectile entities activate
/// or deactivate.
#[derive(Resource, Debug)]
pub struct ProjectilePool {
    pub pool: ObjectPool<Entity>,
}

impl ProjectilePool {
    pub const CAPACITY: usize = 6;
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self {
            pool: ObjectPool::with_capacity(Self::CAPACITY),
        }
    }
}
