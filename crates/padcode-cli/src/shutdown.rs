use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use tracing::info;

/// Stop flag shared between the polling loop and the Ctrl+C handler.
#[derive(Debug, Default)]
pub struct ShutdownSignal {
    shutdown: AtomicBool,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

/// Create a signal that Ctrl+C triggers.
///
/// In raw terminal mode Ctrl+C arrives as a key event instead, so the
/// polling loop checks for it as well.
pub fn install_ctrlc_handler() -> Result<Arc<ShutdownSignal>> {
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_ctrlc.trigger();
    })?;
    Ok(shutdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_state() {
        let signal = ShutdownSignal::new();
        assert!(!signal.is_shutdown());
    }

    #[test]
    fn test_trigger_from_other_thread() {
        let signal = Arc::new(ShutdownSignal::new());
        let signal_clone = Arc::clone(&signal);

        thread::spawn(move || signal_clone.trigger()).join().unwrap();
        assert!(signal.is_shutdown());
    }
}
