//! Trailing window classification
//!
//! Windows are measured back from a reference instant that is captured once
//! per run. An event belongs to a window when it is strictly after the
//! window's start; day ⊆ week ⊆ month.

use serde::{Deserialize, Serialize};

use crate::utils::time::{SECONDS_PER_DAY, SECONDS_PER_MONTH, SECONDS_PER_WEEK};

/// One of the three trailing windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Day,
    Week,
    Month,
}

impl Window {
    pub const ALL: [Window; 3] = [Window::Day, Window::Week, Window::Month];

    /// Window length in seconds
    pub fn seconds(self) -> i64 {
        match self {
            Window::Day => SECONDS_PER_DAY,
            Window::Week => SECONDS_PER_WEEK,
            Window::Month => SECONDS_PER_MONTH,
        }
    }

    /// Exclusive lower bound of the window relative to `now`
    pub fn start(self, now: i64) -> i64 {
        now.saturating_sub(self.seconds())
    }

    pub fn contains(self, now: i64, timestamp: i64) -> bool {
        timestamp > self.start(now)
    }
}

/// Set of windows an event falls into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSet {
    pub day: bool,
    pub week: bool,
    pub month: bool,
}

impl WindowSet {
    pub fn contains(&self, window: Window) -> bool {
        match window {
            Window::Day => self.day,
            Window::Week => self.week,
            Window::Month => self.month,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.day || self.week || self.month)
    }

    pub fn iter(&self) -> impl Iterator<Item = Window> + '_ {
        Window::ALL.into_iter().filter(|w| self.contains(*w))
    }
}

/// Classifies timestamps against a fixed reference instant
#[derive(Debug, Clone, Copy)]
pub struct WindowClassifier {
    now: i64,
}

impl WindowClassifier {
    pub fn new(now: i64) -> Self {
        Self { now }
    }

    pub fn now(&self) -> i64 {
        self.now
    }

    pub fn classify(&self, timestamp: i64) -> WindowSet {
        classify(self.now, timestamp)
    }
}

/// Determine which trailing windows contain `timestamp`
pub fn classify(now: i64, timestamp: i64) -> WindowSet {
    WindowSet {
        day: Window::Day.contains(now, timestamp),
        week: Window::Week.contains(now, timestamp),
        month: Window::Month.contains(now, timestamp),
    }
}
