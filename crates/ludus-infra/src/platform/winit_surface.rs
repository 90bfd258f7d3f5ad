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

//! A `winit` window cleared and presented through `wgpu`.
//!
//! The event loop is pumped rather than run, so the game loop keeps control of
//! the frame cadence: every `is_closed` call drains whatever events the
//! windowing system has queued and returns immediately.

use crate::graphics::WgpuClearContext;
use ludus_core::{DisplaySurface, LinearRgba, SurfaceBackend, SurfaceCreationError, SurfaceDescriptor};
use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

const OPEN_POLL_INTERVAL: Duration = Duration::from_millis(10);
const DEFAULT_OPEN_ATTEMPTS: u32 = 200;

/// Event-loop callbacks for the single game window.
///
/// The handler only records what happened; the surface reads the flags after
/// each pump.
struct WindowEvents {
    pending_attributes: Option<WindowAttributes>,
    window: Option<Arc<Window>>,
    creation_error: Option<String>,
    close_requested: bool,
    resized_to: Option<(u32, u32)>,
}

impl WindowEvents {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            pending_attributes: Some(attributes),
            window: None,
            creation_error: None,
            close_requested: false,
            resized_to: None,
        }
    }

    fn request_close(&mut self, event_loop: &ActiveEventLoop, reason: &str) {
        if !self.close_requested {
            log::info!("Window close requested ({reason}).");
        }
        self.close_requested = true;
        event_loop.exit();
    }
}

impl ApplicationHandler for WindowEvents {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.pending_attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("Winit window created successfully (id: {:?}).", window.id());
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.creation_error = Some(e.to_string());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().is_some_and(|w| w.id() != window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.request_close(event_loop, "close button"),
            WindowEvent::Destroyed => self.request_close(event_loop, "window destroyed"),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.request_close(event_loop, "Escape pressed"),
            WindowEvent::Resized(size) => {
                log::debug!("Window resized to {}x{}", size.width, size.height);
                self.resized_to = Some((size.width, size.height));
            }
            _ => {}
        }
    }
}

/// Opens desktop windows with a `wgpu` swapchain.
///
/// Most platforms allow a single event loop per process, so a process should
/// create at most one surface through this backend.
#[derive(Debug, Clone, Copy)]
pub struct WinitSurfaceBackend {
    open_attempts: u32,
}

impl WinitSurfaceBackend {
    /// Creates a backend with the default window-open timeout.
    pub fn new() -> Self {
        Self {
            open_attempts: DEFAULT_OPEN_ATTEMPTS,
        }
    }

    /// Sets how many event-loop pumps to wait for the window to appear.
    pub fn with_open_attempts(mut self, attempts: u32) -> Self {
        self.open_attempts = attempts.max(1);
        self
    }

    fn open_window(
        &self,
        event_loop: &mut EventLoop<()>,
        events: &mut WindowEvents,
    ) -> Result<Arc<Window>, SurfaceCreationError> {
        for _ in 0..self.open_attempts {
            let status = event_loop.pump_app_events(Some(OPEN_POLL_INTERVAL), events);

            if let Some(err) = events.creation_error.take() {
                return Err(SurfaceCreationError::Platform(err));
            }
            if let Some(window) = &events.window {
                return Ok(Arc::clone(window));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(SurfaceCreationError::Platform(format!(
                    "event loop exited with code {code} before the window opened"
                )));
            }
        }
        Err(SurfaceCreationError::Platform(
            "timed out waiting for the window to open".to_string(),
        ))
    }
}

impl Default for WinitSurfaceBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceBackend for WinitSurfaceBackend {
    type Surface = WinitSurface;

    fn create_surface(&self, descriptor: &SurfaceDescriptor) -> Result<WinitSurface, SurfaceCreationError> {
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(SurfaceCreationError::InvalidDimensions {
                width: descriptor.width,
                height: descriptor.height,
            });
        }

        log::info!(
            "Building window with title: '{}' and size: {}x{}",
            descriptor.title,
            descriptor.width,
            descriptor.height
        );

        let mut event_loop =
            EventLoop::new().map_err(|e| SurfaceCreationError::Platform(e.to_string()))?;
        let attributes = Window::default_attributes()
            .with_title(descriptor.title.clone())
            .with_inner_size(LogicalSize::new(descriptor.width, descriptor.height))
            .with_visible(true);
        let mut events = WindowEvents::new(attributes);

        let window = self.open_window(&mut event_loop, &mut events)?;
        let size = window.inner_size();

        let graphics = pollster::block_on(WgpuClearContext::new(
            Arc::clone(&window),
            size.width,
            size.height,
            descriptor.vsync,
        ))
        .map_err(|e| SurfaceCreationError::Graphics(format!("{e:#}")))?;

        log::info!(
            "Display surface ready on \"{}\" ({}x{} physical).",
            graphics.adapter_name(),
            size.width,
            size.height
        );

        Ok(WinitSurface {
            graphics,
            window,
            events,
            event_loop,
            clear_color: LinearRgba::BLACK,
            closed: false,
        })
    }
}

/// A live desktop window.
///
/// Field order matters: the swapchain is dropped before the window, and the
/// window before the event loop.
pub struct WinitSurface {
    graphics: WgpuClearContext,
    window: Arc<Window>,
    events: WindowEvents,
    event_loop: EventLoop<()>,
    clear_color: LinearRgba,
    closed: bool,
}

impl DisplaySurface for WinitSurface {
    fn is_closed(&mut self) -> bool {
        if self.closed {
            return true;
        }

        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.events);

        if let Some((width, height)) = self.events.resized_to.take() {
            self.graphics.resize(width, height);
        }
        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited with code {code}.");
            self.closed = true;
        }
        if self.events.close_requested {
            self.closed = true;
        }
        self.closed
    }

    fn clear(&mut self, color: LinearRgba) {
        self.clear_color = color;
    }

    fn present(&mut self) {
        if self.closed {
            return;
        }
        self.window.pre_present_notify();
        self.graphics.clear_and_present(self.clear_color);
    }
}

impl Drop for WinitSurface {
    fn drop(&mut self) {
        log::debug!("Closing window {:?}.", self.window.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_attempts_never_drop_below_one() {
        assert_eq!(WinitSurfaceBackend::default().open_attempts, DEFAULT_OPEN_ATTEMPTS);
        assert_eq!(WinitSurfaceBackend::new().with_open_attempts(0).open_attempts, 1);
        assert_eq!(WinitSurfaceBackend::new().with_open_attempts(5).open_attempts, 5);
    }

    #[test]
    fn zero_sized_windows_are_refused_before_touching_the_display() {
        let backend = WinitSurfaceBackend::new().with_open_attempts(1);
        let result = backend.create_surface(&SurfaceDescriptor::new("zero", 0, 480));
        assert!(matches!(
            result,
            Err(SurfaceCreationError::InvalidDimensions { width: 0, height: 480 })
        ));
    }
}
