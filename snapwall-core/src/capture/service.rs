use anyhow::Context as _;

use crate::{
    capture::source::{CameraBackend, FrameRgba, FrameSource},
    foundation::error::{SnapwallError, SnapwallResult},
    photo::model::ImageData,
};

/// Width of a produced still in pixels.
pub const STILL_WIDTH: u32 = 600;
/// Height of a produced still in pixels (3:4 portrait together with
/// [`STILL_WIDTH`]).
pub const STILL_HEIGHT: u32 = 800;

/// Best-effort audio cue played on every successful frame grab.
///
/// A failing cue never fails the capture; the service swallows the error.
pub trait ShutterCue {
    /// Play the cue once.
    fn play(&self) -> SnapwallResult<()>;
}

/// Produces fixed-aspect stills from an exclusively owned live stream.
///
/// The stream handle is acquired once via [`CaptureService::open`] and
/// released when the service (or the session owning it) is dropped.
pub struct CaptureService {
    stream: Box<dyn FrameSource>,
    shutter: Option<Box<dyn ShutterCue>>,
}

impl std::fmt::Debug for CaptureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureService")
            .field("shutter", &self.shutter.is_some())
            .finish_non_exhaustive()
    }
}

impl CaptureService {
    /// Acquire the backend's stream and build a service around it.
    pub fn open(camera: &dyn CameraBackend) -> SnapwallResult<Self> {
        Ok(Self::from_stream(camera.open_stream()?))
    }

    /// Build a service around an already-open stream.
    pub fn from_stream(stream: Box<dyn FrameSource>) -> Self {
        Self {
            stream,
            shutter: None,
        }
    }

    /// Attach a shutter cue.
    pub fn with_shutter(mut self, cue: Box<dyn ShutterCue>) -> Self {
        self.shutter = Some(cue);
        self
    }

    /// Copy the stream's current frame into a PNG still of
    /// [`STILL_WIDTH`]x[`STILL_HEIGHT`].
    ///
    /// The frame is stretched to the still size, matching the original
    /// viewfinder draw. A missing or empty frame is a capture error and
    /// produces no still.
    pub fn capture_still(&self) -> SnapwallResult<ImageData> {
        let frame = self.stream.frame()?;
        if frame.is_empty() {
            return Err(SnapwallError::capture("source has no active frame"));
        }
        let still = encode_still(&frame)?;

        if let Some(cue) = &self.shutter {
            if let Err(err) = cue.play() {
                tracing::debug!(error = %err, "shutter cue failed");
            }
        }

        Ok(still)
    }
}

fn encode_still(frame: &FrameRgba) -> SnapwallResult<ImageData> {
    let buf = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| SnapwallError::capture("frame buffer does not match its dimensions"))?;
    let still = image::imageops::resize(
        &buf,
        STILL_WIDTH,
        STILL_HEIGHT,
        image::imageops::FilterType::Triangle,
    );

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(still)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .context("encode still png")?;
    Ok(ImageData::new(bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/capture/service.rs"]
mod tests;
