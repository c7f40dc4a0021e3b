use crate::foundation::error::{SnapwallError, SnapwallResult};

/// A single RGBA8 frame sampled from a live video feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data, row-major.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Whether the frame carries no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}

/// A live video feed that can be sampled for its current frame.
///
/// The handle is owned exclusively by the capture service for the whole
/// session; dropping it releases the underlying stream.
pub trait FrameSource {
    /// The current frame, or [`SnapwallError::Capture`] when none is
    /// available.
    fn frame(&self) -> SnapwallResult<FrameRgba>;
}

/// Acquires a video stream once at session start.
///
/// Refusal (the user denying camera access) is reported as
/// [`SnapwallError::PermissionDenied`] and leaves nothing acquired.
pub trait CameraBackend {
    /// Open the live stream this backend fronts.
    fn open_stream(&self) -> SnapwallResult<Box<dyn FrameSource>>;
}

/// Deterministic gradient frames for sessions without a real camera.
///
/// Stands in for hardware in tests and the replay CLI: every sampled frame
/// is identical for a given size, so captured stills are reproducible.
#[derive(Clone, Copy, Debug)]
pub struct TestPattern {
    width: u32,
    height: u32,
}

impl TestPattern {
    /// A pattern of the given feed size; zero dimensions are rejected.
    pub fn new(width: u32, height: u32) -> SnapwallResult<Self> {
        if width == 0 || height == 0 {
            return Err(SnapwallError::validation("TestPattern size must be non-zero"));
        }
        Ok(Self { width, height })
    }
}

impl FrameSource for TestPattern {
    fn frame(&self) -> SnapwallResult<FrameRgba> {
        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                data.push((u64::from(x) * 255 / u64::from(self.width)) as u8);
                data.push((u64::from(y) * 255 / u64::from(self.height)) as u8);
                data.push(128);
                data.push(255);
            }
        }
        Ok(FrameRgba {
            width: self.width,
            height: self.height,
            data,
        })
    }
}

impl CameraBackend for TestPattern {
    fn open_stream(&self) -> SnapwallResult<Box<dyn FrameSource>> {
        Ok(Box::new(*self))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/source.rs"]
mod tests;
