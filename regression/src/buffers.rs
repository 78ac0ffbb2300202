//! Frame scoped numerical buffers.
//!
//! Every buffer allocated while computing a frame is acquired through a [`FrameScope`] and
//! borrows it, so none of them can outlive the frame. Dropping a buffer gives it back to the
//! [`BufferArena`], which keeps count of the live ones for diagnostics.

use std::{
    cell::Cell,
    ops::{Deref, DerefMut},
};

use ndarray::Array1;

/// Keeps track of the numerical buffers alive at any given time.
#[derive(Debug, Default)]
pub struct BufferArena {
    live: Cell<usize>,
    peak: Cell<usize>,
}

impl BufferArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount of buffers currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// The maximum amount of buffers that were alive at the same time.
    pub fn peak(&self) -> usize {
        self.peak.get()
    }

    /// Opens a new scope, buffers acquired through it are released before it ends.
    pub fn scope(&self) -> FrameScope<'_> {
        FrameScope {
            arena: self,
            acquired: Cell::new(0),
        }
    }

    fn acquire(&self) {
        let live = self.live.get() + 1;
        self.live.set(live);
        self.peak.set(self.peak.get().max(live));
    }

    fn release(&self) {
        self.live.set(self.live.get() - 1);
    }
}

/// The lifetime of a single frame's computations.
#[derive(Debug)]
pub struct FrameScope<'a> {
    arena: &'a BufferArena,
    acquired: Cell<usize>,
}

impl FrameScope<'_> {
    /// Allocates a zeroed buffer of length `len`.
    pub fn alloc(&self, len: usize) -> ScopedBuf<'_> {
        self.adopt(Array1::zeros(len))
    }

    /// Takes ownership of `values` as a buffer of this scope.
    pub fn from_vec(&self, values: Vec<f32>) -> ScopedBuf<'_> {
        self.adopt(Array1::from_vec(values))
    }

    /// Takes ownership of an already computed array as a buffer of this scope.
    pub fn adopt(&self, data: Array1<f32>) -> ScopedBuf<'_> {
        self.arena.acquire();
        self.acquired.set(self.acquired.get() + 1);

        ScopedBuf {
            data,
            arena: self.arena,
        }
    }

    /// The total amount of buffers acquired through this scope.
    pub fn acquired(&self) -> usize {
        self.acquired.get()
    }
}

/// A numerical buffer tied to a [`FrameScope`].
#[derive(Debug)]
pub struct ScopedBuf<'s> {
    data: Array1<f32>,
    arena: &'s BufferArena,
}

impl Deref for ScopedBuf<'_> {
    type Target = Array1<f32>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for ScopedBuf<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl Drop for ScopedBuf<'_> {
    fn drop(&mut self) {
        self.arena.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_released_with_the_scope() {
        let arena = BufferArena::new();

        {
            let scope = arena.scope();
            let a = scope.alloc(4);
            let b = scope.from_vec(vec![1., 2.]);
            let c = scope.adopt(&*a + 1.);

            assert_eq!(arena.live(), 3);
            assert_eq!(b.sum(), 3.);
            assert_eq!(c.sum(), 4.);
        }

        assert_eq!(arena.live(), 0);
        assert_eq!(arena.peak(), 3);
    }

    #[test]
    fn early_release() {
        let arena = BufferArena::new();
        let scope = arena.scope();

        let a = scope.alloc(1);
        drop(a);
        let _b = scope.alloc(1);

        assert_eq!(arena.live(), 1);
        assert_eq!(scope.acquired(), 2);
    }

    #[test]
    fn buffers_are_writable() {
        let arena = BufferArena::new();
        let scope = arena.scope();

        let mut a = scope.alloc(3);
        a.fill(2.);

        assert_eq!(a.sum(), 6.);
    }
}
