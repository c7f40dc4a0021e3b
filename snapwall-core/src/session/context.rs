use crate::{
    caption::provider::{CaptionProvider, DEFAULT_LOCALE},
    capture::service::CaptureService,
    capture::source::CameraBackend,
    drag::controller::DragController,
    foundation::core::{PhotoId, Point, Rect, TimeMs},
    foundation::error::SnapwallResult,
    lifecycle::machine::{Lifecycle, Phase},
    photo::model::{Photo, Wall},
    session::snapshot::Snapshot,
};

/// Session configuration.
#[derive(Clone, Debug)]
pub struct SessionOpts {
    /// Locale tag used for caption selection (e.g. `"zh-CN"`); unknown tags
    /// fall back to the default caption set.
    pub locale: String,
    /// Seed for caption randomness; a fixed seed reproduces caption choices.
    pub seed: u64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: 0,
        }
    }
}

/// One interactive camera session.
///
/// The session is the explicit context that owns the stream handle, the
/// caption provider, the lifecycle machine and the drag state; there are no
/// ambient globals. Every operation runs synchronously on the caller's
/// thread in arrival order, and the presentation reads
/// [`Session::snapshot`] after each mutation to redraw.
///
/// Teardown is ownership-based: dropping the session drops the capture
/// service and with it the acquired stream.
#[derive(Debug)]
pub struct Session {
    capture: CaptureService,
    captions: CaptionProvider,
    locale: String,
    lifecycle: Lifecycle,
    drag: DragController,
    now: TimeMs,
}

impl Session {
    /// Acquire `camera`'s stream and start an idle session at time zero.
    pub fn open(opts: SessionOpts, camera: &dyn CameraBackend) -> SnapwallResult<Self> {
        Ok(Self::with_capture(opts, CaptureService::open(camera)?))
    }

    /// Start a session around an already-built capture service.
    pub fn with_capture(opts: SessionOpts, capture: CaptureService) -> Self {
        Self {
            capture,
            captions: CaptionProvider::new(opts.seed),
            locale: opts.locale,
            lifecycle: Lifecycle::new(),
            drag: DragController::new(),
            now: TimeMs::ZERO,
        }
    }

    /// Current session time.
    pub fn now(&self) -> TimeMs {
        self.now
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Photo occupying the eject slot, if any.
    pub fn current(&self) -> Option<&Photo> {
        self.lifecycle.current()
    }

    /// Photos placed on the wall.
    pub fn wall(&self) -> &Wall {
        self.lifecycle.wall()
    }

    /// Capture a still into the eject slot.
    ///
    /// Returns the new photo's id, or `Ok(None)` while a photo is already
    /// in flight: overlapping captures are rejected, not queued. A capture
    /// error leaves the session exactly as it was: no photo is created, no
    /// caption is drawn, no transition is scheduled.
    #[tracing::instrument(skip(self))]
    pub fn capture(&mut self) -> SnapwallResult<Option<PhotoId>> {
        if self.lifecycle.phase() != Phase::Idle {
            tracing::debug!(phase = ?self.lifecycle.phase(), "capture rejected");
            return Ok(None);
        }
        let still = self.capture.capture_still()?;
        let caption = self.captions.caption(&self.locale).to_string();
        Ok(self.lifecycle.begin_capture(still, caption, self.now))
    }

    /// Advance the session clock, applying every due timed transition.
    ///
    /// Time is monotonic: calls with an earlier timestamp are ignored.
    #[tracing::instrument(skip(self))]
    pub fn advance_to(&mut self, now: TimeMs) {
        if now < self.now {
            tracing::trace!(?now, current = ?self.now, "ignoring clock rewind");
            return;
        }
        self.now = now;
        self.lifecycle.advance_to(now);
    }

    /// Start dragging `photo` from `pointer`, given its rendered bounds.
    ///
    /// An id matching neither the current photo nor a wall photo is ignored,
    /// which also covers pointer-downs that hit no photo at all. A new drag
    /// replaces any prior one.
    pub fn begin_drag(&mut self, photo: PhotoId, pointer: Point, bounds: Rect) {
        if !self.holds(photo) {
            tracing::trace!(?photo, "ignoring drag of unknown photo");
            return;
        }
        self.drag.begin(photo, pointer, bounds);
    }

    /// Move the dragged photo with the pointer. No-op without an active
    /// drag.
    pub fn update_drag(&mut self, pointer: Point) {
        let Some((target, top_left)) = self.drag.update(pointer) else {
            return;
        };
        if let Some(photo) = self.photo_mut(target) {
            photo.position = top_left;
        }
    }

    /// End the active drag.
    ///
    /// Releasing the current photo away from the eject origin places it on
    /// the wall (returns `Ok(true)`); any other release just drops the grip
    /// and leaves the layout as dragged. The presentation must route
    /// pointer-leave events here as well, so a drag can never get stuck.
    #[tracing::instrument(skip(self))]
    pub fn end_drag(&mut self) -> SnapwallResult<bool> {
        let Some(target) = self.drag.end() else {
            return Ok(false);
        };
        if self.lifecycle.current().is_some_and(|p| p.id() == target) {
            return self.lifecycle.release_current();
        }
        Ok(false)
    }

    /// Read-only render model of the session after the last mutation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(
            self.lifecycle.phase(),
            self.lifecycle.current(),
            self.lifecycle.wall(),
        )
    }

    fn holds(&self, id: PhotoId) -> bool {
        self.lifecycle.current().is_some_and(|p| p.id() == id)
            || self.lifecycle.wall().get(id).is_some()
    }

    fn photo_mut(&mut self, id: PhotoId) -> Option<&mut Photo> {
        if self.lifecycle.current().is_some_and(|p| p.id() == id) {
            return self.lifecycle.current_mut();
        }
        self.lifecycle.wall_mut().get_mut(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/context.rs"]
mod tests;
