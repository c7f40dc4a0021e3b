//! Snapwall is a deterministic instant-camera photo wall engine.
//!
//! Snapwall models the interaction core of a whimsical camera widget: a still
//! is captured from a live video feed, ejected with a polaroid-style develop
//! sequence, captioned in the user's locale, and dragged onto a virtual wall.
//! Rendering, camera hardware and audio output stay outside the crate behind
//! narrow traits.
//!
//! # Interaction pipeline
//!
//! 1. **Capture**: `Session::capture` grabs a frame through [`CaptureService`]
//!    and a caption through [`CaptionProvider`], producing the current [`Photo`]
//! 2. **Develop**: [`Session::advance_to`] drives the eject (1s) and develop
//!    (3s total) transitions against an explicit millisecond clock
//! 3. **Place**: the drag entry points reposition the current photo or any
//!    wall photo; releasing the current photo away from the eject origin
//!    commits it to the append-only [`Wall`]
//! 4. **Render**: [`Session::snapshot`] exposes a read-only view after every
//!    mutation for the presentation layer to draw
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: time is an explicit [`TimeMs`] value pumped
//!   by the caller, and caption selection runs off a session seed, so whole
//!   interactions replay exactly.
//! - **No IO in the core**: camera acquisition, frame grabs and the shutter
//!   cue live behind [`CameraBackend`], [`FrameSource`] and [`ShutterCue`].
//! - **Single-threaded**: operations run on the caller's thread in arrival
//!   order; there is no queuing and no locking.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod caption;
mod capture;
mod drag;
mod foundation;
mod lifecycle;
mod photo;
mod session;

pub use caption::provider::{CaptionProvider, DEFAULT_LOCALE};
pub use capture::service::{CaptureService, STILL_HEIGHT, STILL_WIDTH, ShutterCue};
pub use capture::source::{CameraBackend, FrameRgba, FrameSource, TestPattern};
pub use drag::controller::DragController;
pub use foundation::core::{PhotoId, Point, Rect, Rng64, Size, TimeMs, Vec2};
pub use foundation::error::{SnapwallError, SnapwallResult};
pub use lifecycle::machine::{DEVELOP_MS, EJECT_MS, Lifecycle, Phase};
pub use photo::model::{ImageData, Photo, Wall};
pub use session::context::{Session, SessionOpts};
pub use session::snapshot::{PhotoView, Snapshot};
