use crate::camera::Camera;

/// Linear RGB, nominally in `[0, 1]`. Channels may exceed that range until
/// tone mapping clamps them.
pub type Color = glam::Vec3;

/// Everything a render reads. Nothing in the crate mutates a scene while
/// rendering it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub ambient: Color,
    pub background: Color,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            ambient: Color::splat(0.1),
            background: Color::ZERO,
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Spheres earlier in the list win ties at equal hit distance.
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: glam::Vec3,
    pub radius: f32,

    pub diffuse: Color,
    pub specular: Color,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: glam::Vec3::ZERO,
            radius: 0.5,
            diffuse: Color::ONE,
            specular: Color::ZERO,
        }
    }
}

impl Sphere {
    pub fn new(center: glam::Vec3, radius: f32, diffuse: Color, specular: Color) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            diffuse,
            specular,
        }
    }
}

/// Point light. No distance attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: glam::Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: glam::Vec3, color: Color) -> Self {
        Self { position, color }
    }

    pub fn white(position: glam::Vec3) -> Self {
        Self::new(position, Color::ONE)
    }
}
