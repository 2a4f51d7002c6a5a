//! Annotation context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration and state for a fallible annotation run.
///
/// This is passed through [`Tree::try_annotate`] and controls
/// recursion limits and interruption.
///
/// [`Tree::try_annotate`]: crate::Tree::try_annotate
#[derive(Debug, Clone)]
pub struct AnnotateContext {
    /// Maximum recursion depth (stack overflow protection)
    pub max_depth: usize,

    /// Interrupt flag - set to true to abort the traversal
    pub interrupt: Arc<AtomicBool>,
}

impl Default for AnnotateContext {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl AnnotateContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Check if the traversal has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of the traversal.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let ctx = AnnotateContext::new();
        assert_eq!(ctx.max_depth, 1000);
        assert!(!ctx.is_interrupted());
    }

    #[test]
    fn test_interrupt_round_trip() {
        let ctx = AnnotateContext::with_max_depth(8);
        ctx.interrupt();
        assert!(ctx.is_interrupted());
        ctx.reset_interrupt();
        assert!(!ctx.is_interrupted());
    }
}
