use orrery_base::Result;
use orrery_geometry::{InnerSpace, Vec3, forward};
use orrery_view::{
    ControlFlags, ControlsConfig, OrbitControl, OrbitControls, OrbitSubject, Pose,
};

fn undamped() -> ControlsConfig {
    ControlsConfig {
        damping: None,
        ..ControlsConfig::default()
    }
}

fn start_pose() -> Pose {
    Pose::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 0.0))
}

#[test]
fn idle_update_keeps_pose() -> Result<()> {
    let mut controls = OrbitControls::new(ControlsConfig::default())?;
    let mut pose = start_pose();
    controls.update(&mut pose);
    assert!((pose.position - Vec3::new(0.0, 0.0, 5.0)).magnitude() < 1.0e-9);
    assert!((forward(pose.orientation) - Vec3::new(0.0, 0.0, -1.0)).magnitude() < 1.0e-9);
    Ok(())
}

#[test]
fn rotate_without_damping_applies_at_once() -> Result<()> {
    let mut controls = OrbitControls::new(undamped())?;
    let mut pose = start_pose();
    controls.rotate(std::f64::consts::FRAC_PI_2, 0.0);
    controls.update(&mut pose);

    assert!((pose.position - Vec3::new(5.0, 0.0, 0.0)).magnitude() < 1.0e-9);
    assert!((forward(pose.orientation) - Vec3::new(-1.0, 0.0, 0.0)).magnitude() < 1.0e-9);
    assert!(!controls.has_pending_input());
    Ok(())
}

#[test]
fn damping_spreads_rotation_over_frames() -> Result<()> {
    let config = ControlsConfig {
        damping: Some(0.5),
        ..ControlsConfig::default()
    };
    let mut controls = OrbitControls::new(config)?;
    let mut pose = start_pose();
    controls.rotate(1.0, 0.0);

    controls.update(&mut pose);
    assert!((pose.position.x - 5.0 * 0.5_f64.sin()).abs() < 1.0e-9);
    controls.update(&mut pose);
    assert!((pose.position.x - 5.0 * 0.75_f64.sin()).abs() < 1.0e-9);
    assert!(controls.has_pending_input());

    controls.reset_damping();
    assert!(!controls.has_pending_input());
    Ok(())
}

#[test]
fn disabled_flags_drop_user_input() -> Result<()> {
    let mut controls = OrbitControls::new(undamped())?;
    controls.set_flags(ControlFlags::NONE);
    controls.rotate(0.5, 0.1);
    controls.dolly(2.0);
    controls.pan(Vec3::new(1.0, 0.0, 0.0));
    assert!(!controls.has_pending_input());

    controls.set_flags(ControlFlags::ALL);
    controls.dolly(2.0);
    assert!(controls.has_pending_input());
    Ok(())
}

#[test]
fn dolly_and_pan_move_the_tracked_object() -> Result<()> {
    let mut controls = OrbitControls::new(undamped())?;
    let mut pose = start_pose();
    controls.dolly(2.0);
    controls.update(&mut pose);
    assert!((pose.position - Vec3::new(0.0, 0.0, 10.0)).magnitude() < 1.0e-9);

    controls.pan(Vec3::new(1.0, 0.0, 0.0));
    controls.update(&mut pose);
    assert!((controls.target() - Vec3::new(1.0, 0.0, 0.0)).magnitude() < 1.0e-12);
    assert!((pose.position() - Vec3::new(1.0, 0.0, 10.0)).magnitude() < 1.0e-9);
    Ok(())
}

#[test]
fn distance_limits_clamp_radius() -> Result<()> {
    let config = ControlsConfig {
        damping: None,
        max_distance: Some(3.0),
        ..ControlsConfig::default()
    };
    let mut controls = OrbitControls::new(config)?;
    let mut pose = start_pose();
    controls.update(&mut pose);
    assert!((pose.position.magnitude() - 3.0).abs() < 1.0e-9);
    Ok(())
}

#[test]
fn invalid_limits_are_rejected() {
    let inverted = ControlsConfig {
        min_distance: 4.0,
        max_distance: Some(1.0),
        ..ControlsConfig::default()
    };
    assert!(OrbitControls::new(inverted).is_err());

    let bad_damping = ControlsConfig {
        damping: Some(0.0),
        ..ControlsConfig::default()
    };
    assert!(OrbitControls::new(bad_damping).is_err());
}
