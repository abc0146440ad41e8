//! Brute-force ray / sphere intersection.

use crate::ray::Ray;
use crate::scene::{Color, Scene, Sphere};

/// Where a ray struck the nearest surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub t: f32,
    pub position: glam::Vec3,
    /// Unit length, pointing away from the sphere center.
    pub normal: glam::Vec3,
    pub diffuse: Color,
    pub specular: Color,
}

/// Distance along `ray` to the entry point of `sphere`.
///
/// Only the nearer root counts: a ray whose origin is inside the sphere, or
/// whose sphere lies behind it, reports no hit.
///
/// `ray.direction` must be unit length, which makes the quadratic's leading
/// coefficient 1:
///
/// t^2 + 2(d.oc)t + (oc.oc - r^2) = 0, where oc = origin - center
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let half_b = oc.dot(ray.direction);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }

    let near = -half_b - discriminant.sqrt();
    (near >= 0.0).then_some(near)
}

/// Nearest hit over every sphere in `scene`.
///
/// The comparison is strict, so the sphere that comes first in
/// `scene.spheres` wins when two are hit at the same distance.
pub fn intersect_scene(ray: &Ray, scene: &Scene) -> Option<HitRecord> {
    let mut nearest: Option<(f32, &Sphere)> = None;

    for sphere in &scene.spheres {
        if let Some(t) = intersect_sphere(ray, sphere) {
            if nearest.map_or(true, |(t_min, _)| t < t_min) {
                nearest = Some((t, sphere));
            }
        }
    }

    let (t, sphere) = nearest?;
    let position = ray.at(t);
    Some(HitRecord {
        t,
        position,
        normal: (position - sphere.center) / sphere.radius,
        diffuse: sphere.diffuse,
        specular: sphere.specular,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Color::ONE, Color::ZERO)
    }

    #[test]
    fn ray_aimed_at_center_hits_at_distance_minus_radius() {
        let sphere = Sphere::new(Vec3::new(1.0, -2.0, 3.0), 1.5, Color::ONE, Color::ZERO);
        for origin in [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(-4.0, 7.0, 3.0),
            Vec3::new(1.0, -2.0, -20.0),
        ] {
            let ray = Ray::towards(origin, sphere.center);
            let t = intersect_sphere(&ray, &sphere).unwrap();
            let expected = (origin - sphere.center).length() - sphere.radius;
            assert_relative_eq!(t, expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn miss_when_discriminant_is_negative() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_sphere(&ray, &unit_sphere_at(Vec3::ZERO)), None);
    }

    #[test]
    fn miss_when_sphere_is_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(intersect_sphere(&ray, &unit_sphere_at(Vec3::ZERO)), None);
    }

    #[test]
    fn miss_when_origin_is_inside() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_sphere(&ray, &unit_sphere_at(Vec3::ZERO)), None);
    }

    #[test]
    fn ray_leaving_the_surface_misses_its_own_sphere() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let surface = Vec3::new(0.0, 0.0, 1.0);
        for target in [
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(-3.0, 1.0, 2.0),
        ] {
            let ray = Ray::towards(surface, target);
            assert_eq!(intersect_sphere(&ray, &sphere), None);
        }
    }

    #[test]
    fn scene_picks_nearest_sphere() {
        let scene = Scene::default()
            .with_sphere(unit_sphere_at(Vec3::new(0.0, 0.0, -10.0)))
            .with_sphere(unit_sphere_at(Vec3::new(0.0, 0.0, -4.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = intersect_scene(&ray, &scene).unwrap();
        assert_relative_eq!(hit.t, 3.0);
        assert_relative_eq!(hit.position.z, -3.0);
        assert_relative_eq!(hit.normal.z, 1.0);
    }

    #[test]
    fn ties_go_to_the_first_sphere() {
        let red = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Color::X, Color::ZERO);
        let green = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Color::Y, Color::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let scene = Scene::default().with_sphere(red).with_sphere(green);
        assert_eq!(intersect_scene(&ray, &scene).unwrap().diffuse, Color::X);

        let scene = Scene::default().with_sphere(green).with_sphere(red);
        assert_eq!(intersect_scene(&ray, &scene).unwrap().diffuse, Color::Y);
    }

    #[test]
    fn normal_is_unit_length() {
        let sphere = Sphere::new(Vec3::new(0.5, 0.5, -6.0), 2.5, Color::ONE, Color::ONE);
        let scene = Scene::default().with_sphere(sphere);
        let ray = Ray::towards(Vec3::ZERO, Vec3::new(1.0, 1.2, -6.0));

        let hit = intersect_scene(&ray, &scene).unwrap();
        assert_relative_eq!(hit.normal.length(), 1.0, epsilon = 1e-4);
        assert_eq!(hit.specular, Color::ONE);
    }

    #[test]
    fn empty_scene_never_hits() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(intersect_scene(&ray, &Scene::default()), None);
    }
}
