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

//! An offscreen surface for machines without a display.

use ludus_core::{DisplaySurface, LinearRgba, SurfaceBackend, SurfaceCreationError, SurfaceDescriptor};

/// Creates [`HeadlessSurface`]s that close after a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSurfaceBackend {
    frame_budget: u64,
}

impl HeadlessSurfaceBackend {
    /// Surfaces from this backend report closed once `frame_budget` frames
    /// have been presented. A budget of zero closes before the first frame.
    pub fn new(frame_budget: u64) -> Self {
        Self { frame_budget }
    }

    /// The number of frames each surface presents before closing.
    pub fn frame_budget(&self) -> u64 {
        self.frame_budget
    }
}

impl SurfaceBackend for HeadlessSurfaceBackend {
    type Surface = HeadlessSurface;

    fn create_surface(
        &self,
        descriptor: &SurfaceDescriptor,
    ) -> Result<HeadlessSurface, SurfaceCreationError> {
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(SurfaceCreationError::InvalidDimensions {
                width: descriptor.width,
                height: descriptor.height,
            });
        }

        log::info!(
            "Headless surface '{}' ({}x{}) opened for {} frames.",
            descriptor.title,
            descriptor.width,
            descriptor.height,
            self.frame_budget
        );

        Ok(HeadlessSurface {
            descriptor: descriptor.clone(),
            frame_budget: self.frame_budget,
            frames_presented: 0,
            clear_count: 0,
            last_clear_color: None,
        })
    }
}

/// A surface with no window behind it. It only counts what it is asked to do.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    descriptor: SurfaceDescriptor,
    frame_budget: u64,
    frames_presented: u64,
    clear_count: u64,
    last_clear_color: Option<LinearRgba>,
}

impl HeadlessSurface {
    /// The descriptor this surface was created from.
    pub fn descriptor(&self) -> &SurfaceDescriptor {
        &self.descriptor
    }

    /// Frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Number of `clear` calls so far.
    pub fn clear_count(&self) -> u64 {
        self.clear_count
    }

    /// The color of the most recent `clear`, if any.
    pub fn last_clear_color(&self) -> Option<LinearRgba> {
        self.last_clear_color
    }
}

impl DisplaySurface for HeadlessSurface {
    fn is_closed(&mut self) -> bool {
        self.frames_presented >= self.frame_budget
    }

    fn clear(&mut self, color: LinearRgba) {
        self.clear_count += 1;
        self.last_clear_color = Some(color);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        log::trace!(
            "Headless frame {}/{} presented.",
            self.frames_presented,
            self.frame_budget
        );
    }
}
