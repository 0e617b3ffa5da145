//! Page-level scroll lock held while the mobile drawer is open

/// The page surface whose scrolling can be suppressed
pub trait ScrollSurface {
    fn lock(&mut self);
    fn unlock(&mut self);
}

/// Owning guard over a [`ScrollSurface`].
///
/// Tracks whether the lock is held so the surface sees exactly one `lock`
/// per acquisition and one `unlock` per release, however often
/// `acquire`/`release` are called. Dropping the guard releases the lock.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    held: bool,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            held: false,
        }
    }

    /// Lock page scrolling. Returns `false` if it was already locked.
    pub fn acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.surface.lock();
        self.held = true;
        true
    }

    /// Unlock page scrolling. Returns `false` if it was not locked.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.surface.unlock();
        self.held = false;
        true
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Surface that ignores lock requests (server rendering)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl ScrollSurface for NoopSurface {
    fn lock(&mut self) {}
    fn unlock(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Counting {
        locks: Rc<Cell<usize>>,
        unlocks: Rc<Cell<usize>>,
    }

    impl ScrollSurface for Counting {
        fn lock(&mut self) {
            self.locks.set(self.locks.get() + 1);
        }
        fn unlock(&mut self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    #[test]
    fn test_double_acquire_locks_once() {
        let surface = Counting::default();
        let mut lock = ScrollLock::new(surface.clone());
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert_eq!(surface.locks.get(), 1);
        assert!(lock.is_held());
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let surface = Counting::default();
        let mut lock = ScrollLock::new(surface.clone());
        assert!(!lock.release());
        assert_eq!(surface.unlocks.get(), 0);
    }

    #[test]
    fn test_drop_releases_held_lock() {
        let surface = Counting::default();
        {
            let mut lock = ScrollLock::new(surface.clone());
            lock.acquire();
        }
        assert_eq!(surface.locks.get(), 1);
        assert_eq!(surface.unlocks.get(), 1);
    }

    #[test]
    fn test_drop_after_release_does_not_unlock_twice() {
        let surface = Counting::default();
        {
            let mut lock = ScrollLock::new(surface.clone());
            lock.acquire();
            lock.release();
        }
        assert_eq!(surface.unlocks.get(), 1);
    }
}
