use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Cancelable sleep between production cycles. A plain `thread::sleep`
/// cannot be interrupted; this waits on a condvar so `notify_all` (stop
/// path) wakes the sleeper immediately.
pub struct StopWait {
    notified: Mutex<bool>,
    condvar: Condvar,
}

impl StopWait {
    pub fn new() -> Self {
        Self {
            notified: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Sleeps up to `duration`. Returns true when woken by `notify_all`,
    /// false when the full duration elapsed. Spurious wakes re-enter the
    /// wait; a pending notification is consumed by the wait that sees it.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut notified = self.notified.lock().unwrap();
        while !*notified {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            notified = self
                .condvar
                .wait_timeout(notified, deadline - now)
                .unwrap()
                .0;
        }
        let was_notified = *notified;
        *notified = false;
        was_notified
    }

    pub fn notify_all(&self) {
        let mut notified = self.notified.lock().unwrap();
        *notified = true;
        self.condvar.notify_all();
    }
}

impl Default for StopWait {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_timeout_elapses() {
        let wait = StopWait::new();
        let start = Instant::now();
        let notified = wait.wait_timeout(Duration::from_millis(30));
        assert!(!notified);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_notify_wakes_sleeper() {
        let wait = Arc::new(StopWait::new());
        let sleeper = wait.clone();
        let handle = thread::spawn(move || {
            let start = Instant::now();
            let notified = sleeper.wait_timeout(Duration::from_secs(5));
            (notified, start.elapsed())
        });

        thread::sleep(Duration::from_millis(50));
        wait.notify_all();

        let (notified, elapsed) = handle.join().unwrap();
        assert!(notified);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_pending_notify_consumed_once() {
        let wait = StopWait::new();
        wait.notify_all();
        assert!(wait.wait_timeout(Duration::from_millis(10)));
        assert!(!wait.wait_timeout(Duration::from_millis(10)));
    }
}
