use chrono::NaiveTime;
use parking_lot::Mutex;

/// Source of the current wall-clock time
pub trait TimeSource: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local system time
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveTime {
        chrono::Local::now().time()
    }
}

/// A settable clock for tests and demos
#[derive(Debug)]
pub struct FixedClock {
    time: Mutex<NaiveTime>,
}

impl FixedClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        *self.time.lock() = time;
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        *self.time.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(NaiveTime::from_hms_opt(4, 0, 0).unwrap());
        clock.set(NaiveTime::from_hms_opt(20, 0, 0).unwrap());
        assert_eq!(clock.now(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }
}
