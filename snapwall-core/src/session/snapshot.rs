use crate::{
    foundation::core::{PhotoId, Point},
    lifecycle::machine::Phase,
    photo::model::{ImageData, Photo, Wall},
};

/// Read-only view of the session handed to the presentation layer.
///
/// Borrowed from the session after a mutation; serializable so non-Rust
/// presentations can consume it as JSON. The view imposes no visual
/// representation; it only says what exists and where.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Snapshot<'a> {
    /// Lifecycle phase after the last mutation.
    pub phase: Phase,
    /// Photo in the eject slot, if any.
    pub current: Option<PhotoView<'a>>,
    /// Wall photos in placement order.
    pub wall: Vec<PhotoView<'a>>,
}

/// One photo as the presentation should draw it.
#[derive(Clone, Debug, serde::Serialize)]
pub struct PhotoView<'a> {
    /// Stable identifier.
    pub id: PhotoId,
    /// Top-left position.
    pub position: Point,
    /// Whether to render the developing obscuration.
    pub developing: bool,
    /// Caption under the photo.
    pub caption: &'a str,
    /// Encoded still payload.
    pub image: &'a ImageData,
}

impl<'a> PhotoView<'a> {
    fn of(photo: &'a Photo) -> Self {
        Self {
            id: photo.id(),
            position: photo.position(),
            developing: photo.is_developing(),
            caption: photo.caption(),
            image: photo.image(),
        }
    }
}

impl<'a> Snapshot<'a> {
    pub(crate) fn of(phase: Phase, current: Option<&'a Photo>, wall: &'a Wall) -> Self {
        Self {
            phase,
            current: current.map(PhotoView::of),
            wall: wall.iter().map(PhotoView::of).collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/snapshot.rs"]
mod tests;
