//! Builds the default scene (number plane plus the vector (3, 4)) and prints
//! every descriptor as path text, followed by a few measurements.
//!
//! Run with `RUST_LOG=debug cargo run --example plane --features tracing`.

use plotmath::prelude::*;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let scale = ScaleContext::default();

    let scene: Vec<Figure> = vec![
        NumberPlane::new(&scale).into(),
        Vector::new(3.0, 4.0).into(),
    ];
    for descriptor in draw_all(&scene, &scale) {
        println!("{}", descriptor);
    }

    let v = Vector::new(3.0, 4.0);
    println!("|v| = {}, angle = {}", v.magnitude(), v.angle());
    println!("unit(v) = {:?}", v.unit()?);

    let circle = Circle::new(Point::new(1.0, 1.0), 0.5)?;
    println!("{}", circle.equation(&scale));
    println!("device area = {}", circle.device_area(&scale));

    let parabola = Graph::new(|x| x * x, (0.0, 1.0))?;
    println!("area under x² on [0, 1) ≈ {}", parabola.area());
    println!("d/dx x² at 0.5 ≈ {}", parabola.derivative().eval(0.5));

    if let Err(e) = Vector::ZERO.unit() {
        eprintln!("{:?}", miette::Report::new(e));
    }
    Ok(())
}
