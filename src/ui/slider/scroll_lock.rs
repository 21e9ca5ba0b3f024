// SPDX-License-Identifier: MPL-2.0
//! Scoped suspension of gallery scrolling.
//!
//! The gallery owns a [`ScrollLock`]; the slider holds a [`ScrollGuard`]
//! for as long as it is open. Dropping the guard is the only way to
//! release it, so every way the slider goes away (close button, backdrop,
//! Escape, the gallery itself being dropped) restores scrolling exactly
//! once.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends scrolling until the returned guard is dropped.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollGuard {
        self.holders.fetch_add(1, Ordering::AcqRel);
        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }
}

/// Proof that scrolling is suspended.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.fetch_sub(1, Ordering::AcqRel);
    }
}
