// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The display surface contract.

use crate::color::LinearRgba;
use thiserror::Error;

/// Describes the surface the loop controller asks a backend to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceDescriptor {
    /// The window title.
    pub title: String,
    /// Requested inner width in logical pixels.
    pub width: u32,
    /// Requested inner height in logical pixels.
    pub height: u32,
    /// Whether presentation should wait for vertical sync.
    pub vsync: bool,
}

impl SurfaceDescriptor {
    /// Creates a descriptor with vsync enabled.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            vsync: true,
        }
    }

    /// Sets whether presentation waits for vertical sync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// An error raised when a display surface cannot be created.
///
/// This is the only failure the control loop knows about, and it is fatal:
/// no controller exists without a surface.
#[derive(Debug, Error)]
pub enum SurfaceCreationError {
    /// The requested dimensions cannot back a surface.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The windowing system refused to create the event loop or the window.
    #[error("windowing system error: {0}")]
    Platform(String),
    /// The graphics backend could not be initialized for the window.
    #[error("graphics initialization failed: {0}")]
    Graphics(String),
}

/// A surface the control loop renders into once per frame.
///
/// Implementations own whatever platform resources they need and release
/// them on drop. None of these calls can fail from the loop's point of view;
/// backend problems while presenting are handled (and logged) by the surface.
pub trait DisplaySurface {
    /// Returns `true` once the surface has been closed and the loop must stop.
    ///
    /// Takes `&mut self` so event-driven backends can pump pending events here.
    fn is_closed(&mut self) -> bool;

    /// Clears the frame being built to `color`.
    fn clear(&mut self, color: LinearRgba);

    /// Presents the frame. May block, e.g. on vertical sync.
    fn present(&mut self);
}

/// A factory for display surfaces.
pub trait SurfaceBackend {
    /// The concrete surface produced by this backend.
    type Surface: DisplaySurface;

    /// Creates a surface matching `descriptor`.
    fn create_surface(
        &self,
        descriptor: &SurfaceDescriptor,
    ) -> Result<Self::Surface, SurfaceCreationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_default_to_vsync() {
        let descriptor = SurfaceDescriptor::new("title", 640, 480);
        assert!(descriptor.vsync);
        assert!(!descriptor.with_vsync(false).vsync);
    }

    #[test]
    fn errors_render_their_context() {
        let err = SurfaceCreationError::InvalidDimensions {
            width: 0,
            height: 480,
        };
        assert_eq!(err.to_string(), "invalid surface dimensions 0x480");
        let err = SurfaceCreationError::Platform("no display".to_string());
        assert_eq!(err.to_string(), "windowing system error: no display");
    }
}
