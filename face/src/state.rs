// ABOUTME: Observable clock state refreshed on every tick.
// ABOUTME: Owns the time source and notifies subscribers with each new sample.

use tracing::trace;

use crate::time::{ClockTime, TimeSource};

type Observer = Box<dyn FnMut(&ClockTime)>;

pub struct ClockState<S> {
    source: S,
    current: ClockTime,
    observers: Vec<Observer>,
}

impl<S: TimeSource> ClockState<S> {
    pub fn new(source: S) -> Self {
        let current = source.now();
        Self {
            source,
            current,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> ClockTime {
        self.current
    }

    /// Samples the source and hands the new time to every observer, in subscription order.
    pub fn refresh(&mut self) -> ClockTime {
        self.current = self.source.now();
        trace!(time = %self.current.datetime(), observers = self.observers.len(), "tick");
        for observer in &mut self.observers {
            observer(&self.current);
        }
        self.current
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&ClockTime) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The injected time source, e.g. to move a `FixedClock` between refreshes.
    pub fn source(&self) -> &S {
        &self.source
    }
}
