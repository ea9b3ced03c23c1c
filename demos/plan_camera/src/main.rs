use argh::FromArgs;
use serde::Deserialize;
use std::path::PathBuf;

use camproj::camera::{Camera, CameraProperties, Pole};
use camproj::field::Field;
use camproj::optim::{optimize_camera, OptimizationMethod};

#[derive(FromArgs)]
/// Aim one camera per pole at a field described in a JSON scenario
struct Args {
    /// path to the scenario file
    #[argh(option)]
    scenario: PathBuf,

    /// strategy overriding the scenario's, e.g. far_corner or pitch_and_search
    #[argh(option)]
    method: Option<String>,
}

#[derive(Deserialize)]
struct Scenario {
    field: Field,
    poles: Vec<Pole>,
    #[serde(default)]
    camera: CameraProperties,
    #[serde(default = "default_method")]
    method: OptimizationMethod,
}

fn default_method() -> OptimizationMethod {
    OptimizationMethod::AngleBisector
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let scenario: Scenario = serde_json::from_str(&std::fs::read_to_string(&args.scenario)?)?;
    let method = match args.method {
        Some(name) => serde_json::from_value(serde_json::json!({ "type": name }))?,
        None => scenario.method,
    };

    let field = &scenario.field;
    let center = field.center();
    println!(
        "Field: {:.1} x {:.1} m centered at ({:.1}, {:.1}), {:.1} m^2",
        field.width(),
        field.height(),
        center.x,
        center.y,
        field.area()
    );
    println!("Method: {method:?}");

    for (i, pole) in scenario.poles.iter().enumerate() {
        let mut camera = Camera::new(scenario.camera)?;
        camera.mount_to_pole_top(pole);

        let report = optimize_camera(pole, &mut camera, field, method)?;
        println!(
            "Pole #{i} at ({:.1}, {:.1}): height {:.2} m, yaw {:.2} deg, pitch {:.2} deg",
            pole.position().x,
            pole.position().y,
            report.height,
            report.yaw.to_degrees(),
            report.pitch.to_degrees()
        );
        println!(
            "    visible {:.1} m^2 ({:.1}% of the field), footprint {:.1} m^2",
            report.visible_area,
            100.0 * report.visible_area / field.area(),
            report.projection_area
        );
        println!(
            "    average GSD x {:.4} m/px, y {:.4} m/px",
            camera.average_ground_sampling_distance_x(),
            camera.average_ground_sampling_distance_y()?
        );
    }

    Ok(())
}
