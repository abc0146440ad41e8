//! Local Phong illumination with hard shadows.

use crate::intersect::{intersect_scene, HitRecord};
use crate::ray::Ray;
use crate::scene::{Color, Scene};
use crate::util::math;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecularModel {
    /// `max(0, r.v)^shininess` with `r` the light direction mirrored about the normal.
    #[default]
    Phong,
    /// `max(0, n.h)^shininess` with `h` the half vector between light and view.
    Blinn,
}

/// Shading switches. Passed to every [`shade`] call, never stored globally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingConfig {
    pub specular: SpecularModel,
    pub shininess: f32,
    pub shadows: bool,
    /// Distance the shadow-ray origin is pushed along the surface normal.
    /// Zero casts shadow rays from the exact hit point; round-off then decides
    /// whether a point facing away from a light occludes itself.
    pub shadow_bias: f32,
}

impl ShadingConfig {
    pub const DEFAULT_SHININESS: f32 = 64.0;
    pub const DEFAULT_SHADOW_BIAS: f32 = 1e-4;
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            specular: SpecularModel::Phong,
            shininess: Self::DEFAULT_SHININESS,
            shadows: true,
            shadow_bias: Self::DEFAULT_SHADOW_BIAS,
        }
    }
}

/// Outgoing color at `hit`: ambient plus, for every unoccluded light, a
/// diffuse and a specular term. No distance attenuation.
pub fn shade(hit: &HitRecord, scene: &Scene, config: &ShadingConfig) -> Color {
    let mut color = scene.ambient * hit.diffuse;

    let view = (scene.camera.position - hit.position).normalize();
    let shadow_origin = shadow_origin(hit, config);

    for light in &scene.lights {
        let to_light = (light.position - hit.position).normalize();

        if config.shadows && in_shadow(shadow_origin, light.position, scene) {
            continue;
        }

        let diffuse = hit.normal.dot(to_light).max(0.0);
        color += diffuse * hit.diffuse * light.color;

        let highlight = match config.specular {
            SpecularModel::Phong => {
                let reflected = math::reflect(to_light, hit.normal, diffuse).normalize();
                reflected.dot(view)
            }
            SpecularModel::Blinn => {
                let half = (to_light + view).normalize();
                hit.normal.dot(half)
            }
        };
        color += highlight.max(0.0).powf(config.shininess) * hit.specular * light.color;
    }

    color
}

/// Origin of the shadow rays cast from `hit`.
pub fn shadow_origin(hit: &HitRecord, config: &ShadingConfig) -> glam::Vec3 {
    hit.position + config.shadow_bias * hit.normal
}

/// Hard shadow test: any sphere along the ray towards the light occludes it,
/// even one lying beyond the light.
fn in_shadow(origin: glam::Vec3, light: glam::Vec3, scene: &Scene) -> bool {
    intersect_scene(&Ray::towards(origin, light), scene).is_some()
}
