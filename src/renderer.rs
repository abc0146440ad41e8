use std::time::Instant;

use rayon::prelude::*;

use crate::frame::Image;
use crate::intersect::intersect_scene;
use crate::scene::{Color, Scene};
use crate::shading::{shade, ShadingConfig};
use crate::tone::tone_map;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub shading: ShadingConfig,
    /// Trace rows on the rayon pool. The output is identical either way.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shading: ShadingConfig::default(),
            parallel: true,
        }
    }
}

/// One primary ray per pixel, nearest hit, local shading, tone mapping.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, scene: &Scene, width: u32, height: u32) -> Image {
        tracing::debug!(
            width,
            height,
            spheres = scene.spheres.len(),
            lights = scene.lights.len(),
            parallel = self.config.parallel,
            "rendering scene"
        );

        if width == 0 || height == 0 {
            return Image::new(width, height, Color::ZERO);
        }

        let start = Instant::now();
        let mut pixels = vec![Color::ZERO; width as usize * height as usize];
        let row_len = width as usize;

        // Every row is owned by exactly one worker; the scene is only read.
        if self.config.parallel {
            pixels
                .par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(row, out)| self.render_row(scene, row as u32, width, height, out));
        } else {
            pixels
                .chunks_mut(row_len)
                .enumerate()
                .for_each(|(row, out)| self.render_row(scene, row as u32, width, height, out));
        }

        let image = Image::from_pixels(width, height, pixels);
        if image.has_non_finite() {
            tracing::warn!("rendered image contains NaN or infinite pixels");
        }
        tracing::info!(
            width,
            height,
            elapsed_ms = start.elapsed().as_secs_f32() * 1000.0,
            "render finished"
        );
        image
    }

    fn render_row(&self, scene: &Scene, row: u32, width: u32, height: u32, out: &mut [Color]) {
        for (col, pixel) in out.iter_mut().enumerate() {
            *pixel = tone_map(self.trace_pixel(scene, row, col as u32, width, height));
        }
    }

    /// Raw radiance for one pixel, before tone mapping.
    pub fn trace_pixel(&self, scene: &Scene, row: u32, col: u32, width: u32, height: u32) -> Color {
        let ray = scene.camera.primary_ray(row, col, width, height);
        match intersect_scene(&ray, scene) {
            Some(hit) => shade(&hit, scene, &self.config.shading),
            None => scene.background,
        }
    }
}

/// Render with the default configuration.
pub fn render(scene: &Scene, width: u32, height: u32) -> Image {
    Renderer::default().render(scene, width, height)
}
