//! Simple ray tracer example.
//!
//! Builds a small scene in code, renders it and saves a PNG.

use lumen_core::{Camera, Light, Material, Plane, Scene, Sphere};
use lumen_math::{Color3, Point3, Vector3};
use lumen_renderer::{render, RayTracer};

fn main() {
    println!("Lumen - Simple Example");
    println!("======================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!(
        "Scene built in {:?} ({} shapes, {} lights)",
        start.elapsed(),
        scene.shape_count(),
        scene.light_count()
    );

    println!("Rendering {}x{}...", scene.width, scene.height);
    let start = std::time::Instant::now();
    let image = render(&RayTracer::new(&scene));
    println!("Rendered in {:?}", start.elapsed());

    image.save(&scene.output).expect("Failed to save image");
    println!("Saved to {}", scene.output);
}

fn build_scene() -> Scene {
    let camera = Camera::new(
        Point3::new(0.0, 2.0, 8.0),
        Point3::new(0.0, 0.5, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        40.0,
    );
    let mut scene = Scene::new(800, 450, camera)
        .with_output("simple_render.png")
        .with_ambient(Color3::new(0.05, 0.05, 0.08));

    scene.add_light(Light::point(
        Point3::new(5.0, 8.0, 5.0),
        Color3::new(0.7, 0.7, 0.65),
    ));
    scene.add_light(Light::directional(
        Vector3::new(1.0, -1.0, -1.0),
        Color3::new(0.25, 0.25, 0.3),
    ));

    // Ground
    scene.add_shape(Box::new(Plane::new(
        Point3::ORIGIN,
        Vector3::new(0.0, 1.0, 0.0),
        Material::diffuse(Color3::new(0.5, 0.5, 0.5)),
    )));

    // A row of spheres with increasing shininess
    for i in 0..5 {
        let x = -4.0 + 2.0 * i as f64;
        let shininess = 8.0 * 2f64.powi(i);
        scene.add_shape(Box::new(Sphere::new(
            Point3::new(x, 0.8, 0.0),
            0.8,
            Material::new(
                Color3::new(0.2 + 0.15 * i as f64, 0.3, 0.8 - 0.15 * i as f64),
                Color3::new(0.5, 0.5, 0.5),
                shininess,
            ),
        )));
    }

    scene
}
