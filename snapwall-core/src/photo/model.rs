use crate::{
    foundation::core::{PhotoId, Point},
    foundation::error::{SnapwallError, SnapwallResult},
};

/// Opaque immutable image payload produced by the capture service.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageData(Vec<u8>);

impl ImageData {
    /// Wrap encoded image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImageData({} bytes)", self.0.len())
    }
}

/// One captured photo instance.
///
/// The image payload and caption are fixed at capture time; only the
/// position (written by the drag path) and the develop flag (cleared once by
/// the develop transition) ever change.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Photo {
    pub(crate) id: PhotoId,
    pub(crate) image: ImageData,
    pub(crate) position: Point,
    pub(crate) developing: bool,
    pub(crate) caption: String,
}

impl Photo {
    pub(crate) fn new(id: PhotoId, image: ImageData, caption: String) -> Self {
        Self {
            id,
            image,
            position: Point::ZERO,
            developing: true,
            caption,
        }
    }

    /// Identifier assigned at capture time.
    pub fn id(&self) -> PhotoId {
        self.id
    }

    /// Encoded still payload.
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    /// Current top-left position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the instant-film develop phase is still running.
    pub fn is_developing(&self) -> bool {
        self.developing
    }

    /// Localized caption attached at capture.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Append-only ordered collection of photos placed on the wall.
///
/// Insertion order is preserved and no removal is exposed; photos leave the
/// wall only with the session itself.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Wall {
    photos: Vec<Photo>,
}

impl Wall {
    /// Empty wall.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo; duplicate ids are rejected.
    pub fn push(&mut self, photo: Photo) -> SnapwallResult<()> {
        if self.photos.iter().any(|p| p.id == photo.id) {
            return Err(SnapwallError::validation("wall already holds this photo id"));
        }
        self.photos.push(photo);
        Ok(())
    }

    /// Photos in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    /// Photos in placement order, as a slice.
    pub fn as_slice(&self) -> &[Photo] {
        &self.photos
    }

    /// Look a photo up by id.
    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: PhotoId) -> Option<&mut Photo> {
        self.photos.iter_mut().find(|p| p.id == id)
    }

    /// Number of photos on the wall.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the wall is empty.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/photo/model.rs"]
mod tests;
