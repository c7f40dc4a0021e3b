use crate::foundation::core::{PhotoId, Point, Rect, Vec2};

#[derive(Clone, Copy, Debug)]
struct Grip {
    target: PhotoId,
    offset: Vec2,
}

/// Generic pointer-drag logic shared by the current photo and wall photos.
///
/// The controller only does pointer math; the session decides which
/// collection the produced positions are written into. There is one grip at
/// a time: a new [`DragController::begin`] replaces any prior one, and
/// updates or releases without a grip are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    grip: Option<Grip>,
}

impl DragController {
    /// Controller with no active grip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grab `target`, remembering where inside its rendered bounds the
    /// pointer took hold.
    pub fn begin(&mut self, target: PhotoId, pointer: Point, bounds: Rect) {
        self.grip = Some(Grip {
            target,
            offset: pointer - bounds.origin(),
        });
    }

    /// New top-left for the held photo, or `None` when nothing is held.
    pub fn update(&self, pointer: Point) -> Option<(PhotoId, Point)> {
        self.grip.map(|g| (g.target, pointer - g.offset))
    }

    /// Release the grip, returning the photo that was held.
    pub fn end(&mut self) -> Option<PhotoId> {
        self.grip.take().map(|g| g.target)
    }

    /// Photo currently held, if any.
    pub fn target(&self) -> Option<PhotoId> {
        self.grip.map(|g| g.target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drag/controller.rs"]
mod tests;
