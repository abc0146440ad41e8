use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::Vec3;
use sphere_tracer_lib::{
    Camera, Color, Light, RenderConfig, Renderer, Scene, ShadingConfig, SpecularModel, Sphere,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sphere_tracer")]
#[command(about = "Render a small sphere scene to a PNG file")]
struct Cli {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 640)]
    height: u32,

    /// World-space size of one pixel. Defaults to fitting 4 units across the width.
    #[arg(long)]
    scale: Option<f32>,

    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Use the Blinn half-vector highlight instead of Phong
    #[arg(long)]
    blinn: bool,

    #[arg(long, default_value_t = ShadingConfig::DEFAULT_SHININESS)]
    shininess: f32,

    #[arg(long)]
    no_shadows: bool,

    #[arg(long, default_value_t = ShadingConfig::DEFAULT_SHADOW_BIAS)]
    shadow_bias: f32,

    /// Trace on the calling thread only
    #[arg(long)]
    serial: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            shading: ShadingConfig {
                specular: if self.blinn {
                    SpecularModel::Blinn
                } else {
                    SpecularModel::Phong
                },
                shininess: self.shininess,
                shadows: !self.no_shadows,
                shadow_bias: self.shadow_bias,
            },
            parallel: !self.serial,
        }
    }
}

fn demo_scene(pixel_scale: f32) -> Scene {
    Scene::new(Camera::new(Vec3::new(0.0, 0.0, 5.0), pixel_scale))
        .with_ambient(Color::splat(0.1))
        .with_background(Color::new(0.05, 0.05, 0.1))
        .with_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            1.0,
            Color::new(0.8, 0.2, 0.2),
            Color::splat(0.6),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(-1.2, -0.6, 0.5),
            0.5,
            Color::new(0.2, 0.7, 0.3),
            Color::splat(0.3),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(1.1, 0.7, 0.3),
            0.4,
            Color::new(0.2, 0.3, 0.9),
            Color::ONE,
        ))
        .with_sphere(Sphere::new(
            Vec3::new(0.0, -101.0, -1.0),
            100.0,
            Color::splat(0.6),
            Color::ZERO,
        ))
        .with_light(Light::white(Vec3::new(5.0, 5.0, 5.0)))
        .with_light(Light::new(Vec3::new(-4.0, 3.0, 2.0), Color::splat(0.3)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.width > 0 && cli.height > 0, "image dimensions must be non-zero");

    let scale = cli.scale.unwrap_or(4.0 / cli.width as f32);
    let scene = demo_scene(scale);
    let renderer = Renderer::new(cli.render_config());

    let frame = renderer.render(&scene, cli.width, cli.height);

    // Row 0 is the lowest scanline (texture convention); PNG starts at the top.
    let mut png = frame.to_rgb_image().context("packing rendered pixels")?;
    image::imageops::flip_vertical_in_place(&mut png);
    png.save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    tracing::info!(path = %cli.output.display(), "image written");
    Ok(())
}
