use crate::foundation::core::{PhotoId, TimeMs};

/// Timed lifecycle transitions driven by the session clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// The eject animation finished.
    EjectDone,
    /// The develop budget elapsed.
    DevelopDone,
}

/// One scheduled transition, tagged with the photo it was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    /// When the transition becomes due.
    pub due: TimeMs,
    /// Photo the transition targets.
    pub photo: PhotoId,
    /// Transition to apply.
    pub kind: TimerKind,
}

/// Pending timed transitions, drained as the clock advances.
///
/// Entries are never cancelled; the consumer drops entries whose photo is no
/// longer current.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Scheduled>,
}

impl TimerQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a transition.
    pub fn schedule(&mut self, due: TimeMs, photo: PhotoId, kind: TimerKind) {
        self.entries.push(Scheduled { due, photo, kind });
    }

    /// Remove and return every entry due at `now`, ordered by due time.
    pub fn take_due(&mut self, now: TimeMs) -> Vec<Scheduled> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|s| s.due <= now);
        self.entries = pending;
        due.sort_by_key(|s| s.due);
        due
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/timers.rs"]
mod tests;
