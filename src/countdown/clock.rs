// Clock seam so countdown logic can run against test-controlled time

use chrono::{DateTime, Local};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock used by the running application.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Hand-driven clock for tests; clones share the same instant.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: std::rc::Rc<std::cell::Cell<DateTime<Local>>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(start: DateTime<Local>) -> Self {
        Self {
            current: std::rc::Rc::new(std::cell::Cell::new(start)),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(self.current.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.current.get()
    }
}
