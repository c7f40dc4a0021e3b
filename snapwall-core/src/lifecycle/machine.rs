use crate::{
    foundation::core::{PhotoId, Point, TimeMs},
    foundation::error::SnapwallResult,
    lifecycle::timers::{Scheduled, TimerKind, TimerQueue},
    photo::model::{ImageData, Photo, Wall},
};

/// Milliseconds from capture until the eject animation completes.
pub const EJECT_MS: u64 = 1_000;
/// Milliseconds from capture until the photo is fully developed.
///
/// The eject sub-phase is contained in this budget; both transitions are
/// scheduled from the same capture timestamp.
pub const DEVELOP_MS: u64 = 3_000;

/// Where the current photo sits in its capture-to-wall journey.
///
/// Placement on the wall is not a resident phase: committing the current
/// photo empties the eject slot and returns the machine to [`Phase::Idle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No current photo; the eject slot is empty.
    #[default]
    Idle,
    /// A photo exists and the eject animation is running.
    Ejecting,
    /// Eject finished; the image is still obscured.
    Developing,
    /// The current photo is fully visible.
    Developed,
}

/// The capture → eject → develop → placed state machine.
///
/// Owns the single current-photo slot, the wall and the queue of timed
/// transitions. Nothing moves on its own: time only passes when
/// [`Lifecycle::advance_to`] is called, so tests drive the clock directly.
#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
    current: Option<Photo>,
    wall: Wall,
    timers: TimerQueue,
    next_id: u64,
}

impl Lifecycle {
    /// Idle machine with an empty wall.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Photo occupying the eject slot, if any.
    pub fn current(&self) -> Option<&Photo> {
        self.current.as_ref()
    }

    /// Photos placed on the wall.
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut Photo> {
        self.current.as_mut()
    }

    pub(crate) fn wall_mut(&mut self) -> &mut Wall {
        &mut self.wall
    }

    /// Admit a freshly captured still into the eject slot.
    ///
    /// Rejected (returns `None`) unless the machine is idle: captures while
    /// a photo is in flight are a deliberate no-op, so overlapping captures
    /// cannot exist. On success the photo starts ejecting at `position
    /// (0,0)` with `developing` set, and its eject/develop transitions are
    /// scheduled against `now`.
    pub fn begin_capture(
        &mut self,
        image: ImageData,
        caption: String,
        now: TimeMs,
    ) -> Option<PhotoId> {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "capture rejected: photo already in flight");
            return None;
        }

        self.next_id += 1;
        let id = PhotoId(self.next_id);
        self.current = Some(Photo::new(id, image, caption));
        self.phase = Phase::Ejecting;
        self.timers
            .schedule(now.saturating_add(EJECT_MS), id, TimerKind::EjectDone);
        self.timers
            .schedule(now.saturating_add(DEVELOP_MS), id, TimerKind::DevelopDone);
        Some(id)
    }

    /// Apply every scheduled transition due at `now`, in due order.
    ///
    /// Transitions tagged with a photo that is no longer current are
    /// silently dropped: the photo may have been placed on the wall, or a
    /// newer capture may occupy the slot by the time the timer fires.
    pub fn advance_to(&mut self, now: TimeMs) {
        for entry in self.timers.take_due(now) {
            self.apply(entry);
        }
    }

    fn apply(&mut self, entry: Scheduled) {
        let Some(current) = self.current.as_mut() else {
            tracing::trace!(?entry, "dropping stale timer: eject slot is empty");
            return;
        };
        if current.id != entry.photo {
            tracing::trace!(?entry, "dropping stale timer: photo no longer current");
            return;
        }

        match entry.kind {
            TimerKind::EjectDone => {
                if self.phase == Phase::Ejecting {
                    self.phase = Phase::Developing;
                }
            }
            TimerKind::DevelopDone => {
                current.developing = false;
                self.phase = Phase::Developed;
            }
        }
    }

    /// Handle a drag release of the current photo.
    ///
    /// A release that moved the photo away from the eject origin commits it
    /// to the wall at its dragged position and empties the slot, whatever
    /// the develop state: the user may place a photo before it finishes
    /// developing. A release at the origin leaves everything unchanged.
    /// Returns whether the photo was placed.
    pub fn release_current(&mut self) -> SnapwallResult<bool> {
        match self.current.take() {
            Some(photo) if photo.position != Point::ZERO => {
                self.wall.push(photo)?;
                self.phase = Phase::Idle;
                Ok(true)
            }
            other => {
                self.current = other;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/machine.rs"]
mod tests;
