//! CPU sphere ray tracer.
//!
//! One primary ray per pixel, nearest sphere hit, Phong shading with hard
//! shadows from point lights, then a fixed tone curve. [`render`] returns an
//! [`Image`] that [`Image::to_rgb8`] flattens into the interleaved byte buffer
//! a texture upload consumes.

pub mod camera;
pub mod error;
pub mod frame;
pub mod intersect;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod tone;
pub mod util;

pub use camera::Camera;
pub use error::{Error, Result};
pub use frame::{Image, Rgb8};
pub use intersect::{intersect_scene, intersect_sphere, HitRecord};
pub use ray::Ray;
pub use renderer::{render, RenderConfig, Renderer};
pub use scene::{Color, Light, Scene, Sphere};
pub use shading::{shade, ShadingConfig, SpecularModel};
