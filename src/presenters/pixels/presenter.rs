use std::error::Error;
use std::fmt;

use egui::{ClippedPrimitive, Context as EguiContext, TexturesDelta};
use egui_wgpu::Renderer as EguiRenderer;
use log::debug;
use pixels::{Pixels, SurfaceTexture, wgpu};
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgba_opaque;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::FramePresenter;
use crate::errors::ResourceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelsPresentError {
    SizeMismatch {
        frame: (u32, u32),
        surface: (u32, u32),
    },
}

impl fmt::Display for PixelsPresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { frame, surface } => write!(
                f,
                "frame is {}x{} but surface is {}x{}",
                frame.0, frame.1, surface.0, surface.1
            ),
        }
    }
}

impl Error for PixelsPresentError {}

/// Window framebuffer with an egui overlay drawn over each frame.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, ResourceError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture).map_err(|err| {
            ResourceError::Surface {
                message: err.to_string(),
            }
        })?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResourceError> {
        let surface_error = |err: pixels::TextureError| ResourceError::Surface {
            message: err.to_string(),
        };

        self.pixels
            .resize_surface(width, height)
            .map_err(surface_error)?;
        self.pixels
            .resize_buffer(width, height)
            .map_err(surface_error)?;

        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Draws the last presented frame with the overlay on top.
    pub fn render(
        &mut self,
        shapes: Vec<egui::epaint::ClippedShape>,
        textures_delta: TexturesDelta,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let pixels_per_point = egui_ctx.pixels_per_point();
        let clipped_primitives: Vec<ClippedPrimitive> = egui_ctx.tessellate(shapes, pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.width, self.height],
            pixels_per_point,
        };
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenter for PixelsPresenter {
    type Error = PixelsPresentError;

    fn present(&mut self, frame: &FrameData) -> Result<(), Self::Error> {
        let resolution = frame.pixel_buffer.resolution();

        if !copy_rgba_opaque(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            debug!(
                "dropping frame {} sized for a stale surface",
                frame.frame_index
            );
            return Err(PixelsPresentError::SizeMismatch {
                frame: (resolution.width(), resolution.height()),
                surface: (self.width, self.height),
            });
        }

        Ok(())
    }
}
