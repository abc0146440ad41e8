use crate::ray::Ray;

/// Pinhole camera looking down -Z at a pixel plane through `z = 0`.
///
/// Pixel `(row, col)` of a `width x height` image sits at world coordinates
/// `(scale * col - scale * width / 2, scale * row - scale * height / 2, 0)`,
/// so `pixel_scale` is the world-space size of one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: glam::Vec3,
    pub pixel_scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: glam::Vec3::new(0.0, 0.0, 5.0),
            pixel_scale: 0.01,
        }
    }
}

impl Camera {
    pub fn new(position: glam::Vec3, pixel_scale: f32) -> Self {
        Self {
            position,
            pixel_scale,
        }
    }

    /// World-space point on the pixel plane for `(row, col)`.
    pub fn pixel_position(&self, row: u32, col: u32, width: u32, height: u32) -> glam::Vec2 {
        let scale = self.pixel_scale;
        glam::Vec2::new(
            scale * col as f32 - 0.5 * scale * width as f32,
            scale * row as f32 - 0.5 * scale * height as f32,
        )
    }

    /// Unit-direction ray from the camera through pixel `(row, col)`.
    ///
    /// A camera sitting on the pixel plane exactly over a pixel normalizes a
    /// zero vector; the resulting NaN direction misses every sphere.
    pub fn primary_ray(&self, row: u32, col: u32, width: u32, height: u32) -> Ray {
        let pixel = self.pixel_position(row, col, width, height);
        let direction = glam::Vec3::new(
            pixel.x - self.position.x,
            pixel.y - self.position.y,
            -self.position.z,
        );
        Ray::new(self.position, direction.normalize())
    }
}
