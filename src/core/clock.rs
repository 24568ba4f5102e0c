use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the reference "now" used to classify records.
/// Read on every recompute, never cached by the engine.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock set by hand. Clones share the same instant, so a handle kept
/// outside the orchestrator can move time forward.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Rc::new(Cell::new(instant)),
        }
    }

    pub fn set(&self, instant: NaiveDateTime) {
        self.instant.set(instant);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.instant.get()
    }
}
