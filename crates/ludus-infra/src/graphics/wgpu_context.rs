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

use anyhow::{anyhow, Result};
use ludus_core::LinearRgba;

/// Picks the swapchain present mode.
///
/// With vsync, `Fifo` is used (it is guaranteed to be supported). Without it,
/// `Immediate` is preferred, then `Mailbox`, then `Fifo` as the fallback.
pub fn select_present_mode(available: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox]
        .into_iter()
        .find(|mode| available.contains(mode))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

/// Holds the WGPU state needed to clear and present a window surface.
///
/// This is deliberately minimal: one surface, one device, and a single render
/// pass per frame whose only job is to clear the swapchain image.
#[derive(Debug)]
pub struct WgpuClearContext {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    adapter_name: String,
}

impl WgpuClearContext {
    /// Asynchronously initializes the graphics context for a window.
    ///
    /// ## Arguments
    /// * `target` - Anything wgpu can create a `'static` surface from (e.g. an `Arc<winit::window::Window>`).
    /// * `width`, `height` - The initial physical size of the surface.
    /// * `vsync` - Whether presentation waits for vertical sync.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<Self> {
        log::info!("Initializing WGPU clear context...");

        // --- 1. Create Surface ---
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(target)
            .map_err(|e| anyhow!("Failed to create surface: {e}"))?;

        // --- 2. Select Adapter ---
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .map_err(|e| anyhow!("No compatible graphics adapter: {e}"))?;
        let adapter_info = adapter.get_info();
        log::info!(
            "Using graphics adapter: \"{}\" (Backend: {:?})",
            adapter_info.name,
            adapter_info.backend
        );

        // --- 3. Create Logical Device and Command Queue ---
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Ludus Logical Device"),
                ..Default::default()
            })
            .await
            .map_err(|e| anyhow!("Failed to create logical device: {e}"))?;

        device.on_uncaptured_error(Box::new(|e| {
            log::error!("WGPU Uncaptured Error: {e:?}");
        }));

        // --- 4. Configure Surface ---
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface is not supported by the selected adapter"))?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: select_present_mode(&surface_caps.present_modes, vsync),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);
        log::debug!(
            "Surface configured: {:?} {}x{} ({:?})",
            surface_config.format,
            surface_config.width,
            surface_config.height,
            surface_config.present_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            adapter_name: adapter_info.name,
        })
    }

    /// Reconfigures the swapchain for a new window size. Zero sizes are ignored.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            log::info!("WgpuClearContext: Resizing surface to {new_width}x{new_height}");
            self.surface_config.width = new_width;
            self.surface_config.height = new_height;
            self.surface.configure(&self.device, &self.surface_config);
        } else {
            log::warn!(
                "WgpuClearContext: Ignoring resize request to zero dimensions: {new_width}x{new_height}"
            );
        }
    }

    /// Clears the next swapchain image to `color` and presents it.
    ///
    /// Acquisition problems skip the frame: a lost or outdated swapchain is
    /// reconfigured for the next one, anything else is logged.
    pub fn clear_and_present(&mut self, color: LinearRgba) {
        // --- 1. Acquire Frame from Swap Chain ---
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                log::warn!("WgpuClearContext: Swapchain {e:?}, reconfiguring and skipping frame.");
                self.surface.configure(&self.device, &self.surface_config);
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("WgpuClearContext: Timeout acquiring frame, skipping.");
                return;
            }
            Err(e) => {
                log::error!("WgpuClearContext: Unexpected SurfaceError: {e:?}");
                return;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Ludus Clear Encoder"),
            });

        // --- 2. Clear Pass ---
        {
            let [r, g, b, a] = color.to_f64_array();
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Ludus Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });
        }

        // --- 3. Submit and Present ---
        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }

    /// The name of the adapter the context runs on.
    pub fn adapter_name(&self) -> &str {
        &self.adapter_name
    }
}
