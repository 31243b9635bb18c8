//! Cooperative cancellation flag.
//!
//! Long repaints poll this between rows so a signal handler or another
//! thread can abandon them without tearing any state. Raising the flag
//! never mutates the canvas or the history; whoever observes it decides
//! what to unwind.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared one-shot cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self {
            raised: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raise the flag. Callable from any thread.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Whether the flag is up, without lowering it.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Lower the flag, reporting whether it was up.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_and_take() {
        let interrupt = Interrupt::new();
        assert!(!interrupt.is_raised());
        interrupt.raise();
        assert!(interrupt.is_raised());
        assert!(interrupt.take());
        assert!(!interrupt.is_raised());
        assert!(!interrupt.take());
    }

    #[test]
    fn test_raise_is_idempotent() {
        let interrupt = Interrupt::new();
        interrupt.raise();
        interrupt.raise();
        assert!(interrupt.take());
        assert!(!interrupt.take());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let interrupt = Interrupt::new();
        let handle = interrupt.clone();
        handle.raise();
        assert!(interrupt.is_raised());
        assert!(interrupt.take());
        assert!(!handle.is_raised());
    }

    #[test]
    fn test_raised_from_another_thread() {
        let interrupt = Interrupt::new();
        let handle = interrupt.clone();
        std::thread::spawn(move || handle.raise())
            .join()
            .unwrap();
        assert!(interrupt.is_raised());
    }
}
