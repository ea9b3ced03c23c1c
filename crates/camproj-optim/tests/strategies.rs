use approx::assert_relative_eq;
use camproj_camera::{Camera, CameraProperties, Pole};
use camproj_field::Field;
use camproj_geometry::Coordinate;
use camproj_optim::{optimize_camera, OptimizationMethod, OptimizeError, PoleOptimization};

fn visible_area(camera: &Camera, field: &Field) -> Result<f64, OptimizeError> {
    Ok(field.area_visible_within_projection(&camera.project()?))
}

fn mounted_camera(pole: &Pole) -> Result<Camera, OptimizeError> {
    let mut camera = Camera::new(CameraProperties::default())?;
    camera.mount_to_pole_top(pole);
    Ok(camera)
}

#[test]
fn far_corner_agrees_with_point_at() -> Result<(), Box<dyn std::error::Error>> {
    let pole = Pole::new(Coordinate::new(0.0, 0.0, 0.0), 10.0);
    let field = Field::new(Coordinate::from_xy(20.0, 15.0), Coordinate::from_xy(50.0, 50.0));
    let mut camera = mounted_camera(&pole)?;

    pole.far_corner_optimization(&mut camera, &field)?;

    let mut reference = mounted_camera(&pole)?;
    reference.point_at(&Coordinate::from_xy(50.0, 50.0));
    assert_relative_eq!(camera.yaw(), reference.yaw(), epsilon = 1e-9);
    Ok(())
}

#[test]
fn exhaustive_is_an_upper_bound() -> Result<(), Box<dyn std::error::Error>> {
    let pole = Pole::new(Coordinate::ORIGIN, 10.0);
    let field = Field::from_center(Coordinate::from_xy(0.0, 30.0), 20.0, 20.0);

    let mut far_corner = mounted_camera(&pole)?;
    pole.far_corner_optimization(&mut far_corner, &field)?;

    let mut exhaustive = mounted_camera(&pole)?;
    pole.exhaustive_optimize(&mut exhaustive, &field)?;

    let far_corner_area = visible_area(&far_corner, &field)?;
    let exhaustive_area = visible_area(&exhaustive, &field)?;
    assert!(far_corner_area > 0.0);
    assert!(exhaustive_area >= far_corner_area - 1e-9);
    assert!(exhaustive_area <= field.area() + 1e-9);
    Ok(())
}

#[test]
fn strategies_cover_field_in_front() -> Result<(), Box<dyn std::error::Error>> {
    let pole = Pole::new(Coordinate::new(-10.0, -5.0, 0.0), 12.0);
    let field = Field::from_center(Coordinate::from_xy(10.0, 35.0), 30.0, 40.0);

    for method in [
        OptimizationMethod::FarCorner,
        OptimizationMethod::AngleBisector,
        OptimizationMethod::PitchAndSearch(Default::default()),
    ] {
        let mut camera = mounted_camera(&pole)?;
        let report = optimize_camera(&pole, &mut camera, &field, method)?;
        assert!(report.visible_area > 0.0, "{method:?} sees nothing");
        assert!(report.height <= pole.top_of_pole_height() + 1e-9);
        assert_relative_eq!(camera.position().x, -10.0);
        assert_relative_eq!(camera.position().y, -5.0);
    }
    Ok(())
}

#[test]
fn pole_inside_field_is_left_alone() -> Result<(), Box<dyn std::error::Error>> {
    let pole = Pole::new(Coordinate::from_xy(5.0, 5.0), 10.0);
    let field = Field::from_center(Coordinate::ORIGIN, 40.0, 40.0);
    let mut camera = mounted_camera(&pole)?;
    let before = *camera.properties();

    pole.angle_bisector_optimization(&mut camera, &field)?;
    pole.pitch_and_search_optimization(&mut camera, &field)?;
    assert_eq!(*camera.properties(), before);
    Ok(())
}

#[test]
fn target_gsd_from_pole() -> Result<(), Box<dyn std::error::Error>> {
    let pole = Pole::new(Coordinate::ORIGIN, 10.0);
    let field = Field::from_center(Coordinate::from_xy(40.0, 44.5), 110.0, 69.0);
    let properties = CameraProperties::default()
        .with_sensor_size(14.1864, 10.3776)
        .with_resolution(4112, 3008)
        .with_focal_distance(20.0);
    let mut camera = Camera::new(properties)?;

    pole.target_gsd_optimization(&mut camera, &field, Some(0.02))?;
    assert_relative_eq!(camera.position().z, 10.0);
    assert!(camera.average_ground_sampling_distance_y()? <= 0.02 + 1e-9);
    assert!(camera.average_ground_sampling_distance_x() <= 0.02 + 1e-9);
    Ok(())
}
