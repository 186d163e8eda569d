use std::time::Duration;

/// Pause inserted between cards revealed from the same page.
pub trait Delay {
    fn wait(&mut self, interval: Duration);
}

/// Blocks the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&mut self, interval: Duration) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}

/// Returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&mut self, _interval: Duration) {}
}
