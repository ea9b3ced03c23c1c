use argh::FromArgs;

use camproj::camera::{Camera, CameraProperties, Pole};
use camproj::field::Field;
use camproj::geometry::Coordinate;
use camproj::optim::{PoseOptimizer, TargetGsd};

#[derive(FromArgs)]
/// Plan the mounting height and pitch of a camera for a target ground sampling distance
struct Args {
    /// target ground sampling distance in m/px
    #[argh(option, default = "0.01")]
    gsd: f64,

    /// minimum camera pitch in degrees
    #[argh(option, default = "15.0")]
    min_pitch: f64,

    /// pole height in meters
    #[argh(option, default = "10.0")]
    pole_height: f64,

    /// field center x in meters
    #[argh(option, default = "40.0")]
    field_x: f64,

    /// field center y in meters
    #[argh(option, default = "44.5")]
    field_y: f64,

    /// field width in meters
    #[argh(option, default = "110.0")]
    field_width: f64,

    /// field height in meters
    #[argh(option, default = "69.0")]
    field_height: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let field = Field::from_center(
        Coordinate::from_xy(args.field_x, args.field_y),
        args.field_width,
        args.field_height,
    );
    let pole = Pole::new(Coordinate::ORIGIN, args.pole_height);

    // 4K machine vision sensor behind a 20 mm lens
    let properties = CameraProperties::default()
        .with_sensor_size(14.1864, 10.3776)
        .with_resolution(4112, 3008)
        .with_focal_distance(20.0);
    let mut camera = Camera::new(properties)?;
    camera.mount_to_pole_top(&pole);

    let strategy = TargetGsd {
        target_gsd: Some(args.gsd),
        min_pitch: args.min_pitch.to_radians(),
    };
    let plan = strategy.plan(&pole, &camera, &field)?;

    println!("Target GSD: {} m/px", plan.target_gsd);
    println!();
    println!("Pole height: {} m", pole.height());
    println!("Max height for target GSD x: {:.3} m", plan.max_height_x);
    println!("Max height for target GSD y: {:.3} m", plan.max_height_y);
    println!("Target height: {:.3} m", plan.target_height);
    println!();
    println!("Farthest corner: {:.3} m", plan.far_distance);
    println!("Minimum pitch: {:.2} deg", plan.min_pitch.to_degrees());
    println!("Pitch reaching the far corner: {:.2} deg", plan.max_pitch.to_degrees());
    println!("Pitch for target GSD x: {:.2} deg", plan.pitch_x.to_degrees());
    println!("Pitch for target GSD y: {:.2} deg", plan.pitch_y.to_degrees());
    println!("Chosen pitch: {:.2} deg", plan.pitch.to_degrees());
    if !plan.covers_far_corner() {
        println!("The far corner is out of view at the target GSD");
    }

    strategy.optimize(&pole, &mut camera, &field)?;
    println!();
    println!(
        "Average GSD x {:.4} m/px, y {:.4} m/px",
        camera.average_ground_sampling_distance_x(),
        camera.average_ground_sampling_distance_y()?
    );
    println!(
        "Visible field area: {:.1} of {:.1} m^2",
        field.area_visible_within_projection(&camera.project()?),
        field.area()
    );

    Ok(())
}
