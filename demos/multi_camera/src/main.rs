use argh::FromArgs;

use camproj::camera::{Camera, CameraProperties, Pole};
use camproj::field::Field;
use camproj::geometry::Coordinate;
use camproj::optim::{CameraGroup, Environment};

#[derive(FromArgs)]
/// Spread the yaws of cameras mounted on poles around a field
struct Args {
    /// pole height in meters
    #[argh(option, default = "10.0")]
    pole_height: f64,

    /// field width in meters
    #[argh(option, default = "110.0")]
    field_width: f64,

    /// field height in meters
    #[argh(option, default = "69.0")]
    field_height: f64,
}

const POLE_LOCATIONS: [(f64, f64); 8] = [
    (60.0, 30.0),
    (60.0, -15.0),
    (-60.0, -30.0),
    (-60.0, 15.0),
    (-40.0, 40.0),
    (-25.0, 40.0),
    (25.0, -40.0),
    (40.0, -40.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut environment = Environment::default();
    environment.set_field(Field::from_center(
        Coordinate::ORIGIN,
        args.field_width,
        args.field_height,
    ));

    // 4K machine vision sensor behind a 20 mm lens
    let properties = CameraProperties::default()
        .with_sensor_size(14.1864, 10.3776)
        .with_resolution(4112, 3008)
        .with_focal_distance(20.0);

    for (x, y) in POLE_LOCATIONS {
        let pole = Pole::new(Coordinate::from_xy(x, y), args.pole_height);
        let mut camera = Camera::new(properties)?;
        camera.mount_to_pole_top(&pole);
        environment.add_pole(pole);
        environment.add_camera(camera);
    }

    let targets = environment.optimize_camera_yaws()?;

    for (group, title) in [
        (CameraGroup::LeftRight, "Left/Right cameras"),
        (CameraGroup::TopBottom, "Top/Bottom cameras"),
    ] {
        println!("{title}");
        for target in targets.iter().filter(|t| t.group == group) {
            let camera = &environment.cameras()[target.camera_index];
            println!(
                "    camera #{} at ({:.1}, {:.1}) -> ({:.2}, {:.2}), yaw {:.2} deg",
                target.camera_index,
                camera.position().x,
                camera.position().y,
                target.target.x,
                target.target.y,
                camera.yaw().to_degrees()
            );
        }
    }

    Ok(())
}
