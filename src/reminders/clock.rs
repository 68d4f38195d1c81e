use chrono::{DateTime, Local};

/// Source of "now" for draft resets and overdue checks.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Local};

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same instant.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Rc<Cell<DateTime<Local>>>,
    }

    impl ManualClock {
        pub fn new(now: DateTime<Local>) -> Self {
            Self {
                now: Rc::new(Cell::new(now)),
            }
        }

        pub fn set(&self, now: DateTime<Local>) {
            self.now.set(now);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }
}
