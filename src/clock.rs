use std::time::{Duration, Instant};

/// Monotonic time source injected into the benchmark runner so timing can
/// be scripted in tests. Readings are opaque offsets from an arbitrary
/// origin; only differences between readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Production clock backed by `std::time::Instant`, unaffected by
/// wall-clock adjustments.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Test clock that replays a fixed sequence of readings.
#[cfg(test)]
pub(crate) struct ScriptedClock {
    readings: std::cell::RefCell<std::collections::VecDeque<Duration>>,
}

#[cfg(test)]
impl ScriptedClock {
    pub(crate) fn new(readings: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            readings: std::cell::RefCell::new(readings.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        self.readings
            .borrow_mut()
            .pop_front()
            .expect("ScriptedClock ran out of readings")
    }
}
