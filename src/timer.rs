use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const QUESTION_SECONDS: u16 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    Tick(u16),
    Expired,
}

/// One question's countdown. Sends a `Tick` with the remaining seconds once
/// per second and exactly one `Expired` after `Tick(0)`, then exits. The
/// event loop replaces the whole handle on every index change, so each
/// question gets a fresh window; dropping the handle drops the receiver,
/// which guarantees no stale event is ever observed.
pub struct Countdown {
    pub rx: mpsc::Receiver<TimerEvent>,
    stop: Arc<AtomicBool>,
}

impl Countdown {
    pub fn start(seconds: u16) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let flag = stop.clone();

        thread::spawn(move || {
            let mut remaining = seconds;

            loop {
                // Sleep in slices so a stop lands within ~100ms.
                for _ in 0..10 {
                    if flag.load(Ordering::SeqCst) {
                        return;
                    }
                    thread::sleep(Duration::from_millis(100));
                }

                remaining = remaining.saturating_sub(1);

                if tx.send(TimerEvent::Tick(remaining)).is_err() {
                    return;
                }

                if remaining == 0 {
                    let _ = tx.send(TimerEvent::Expired);
                    return;
                }
            }
        });

        Countdown { rx, stop }
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry() {
        let countdown = Countdown::start(2);
        let mut events = Vec::new();
        while let Ok(ev) = countdown.rx.recv_timeout(Duration::from_secs(3)) {
            events.push(ev);
        }
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick(1),
                TimerEvent::Tick(0),
                TimerEvent::Expired
            ]
        );
    }

    #[test]
    fn stop_ends_without_expiry() {
        let countdown = Countdown::start(60);
        countdown.stop();
        // Thread notices the flag and exits; the channel closes without
        // ever delivering Expired.
        let mut saw_expired = false;
        while let Ok(ev) = countdown.rx.recv_timeout(Duration::from_secs(2)) {
            if ev == TimerEvent::Expired {
                saw_expired = true;
            }
        }
        assert!(!saw_expired);
    }
}
