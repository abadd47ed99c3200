use orrery_base::Result;
use orrery_view::{Gesture, GestureClassifier, Point2};

#[test]
fn small_travel_is_a_click() {
    let mut gestures = GestureClassifier::default();
    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    let gesture = gestures.on_release(Point2::new(0.01, 0.01), 0.1);
    assert_eq!(gesture, Gesture::Click(Point2::new(0.01, 0.01)));
    assert!(!gestures.is_pressed());
}

#[test]
fn large_travel_is_a_drag() {
    let mut gestures = GestureClassifier::default();
    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    assert_eq!(gestures.on_release(Point2::new(0.2, 0.2), 0.1), Gesture::Drag);
}

#[test]
fn travel_equal_to_threshold_is_a_drag() {
    let mut gestures = GestureClassifier::default();
    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    assert_eq!(gestures.on_release(Point2::new(0.05, 0.0), 0.1), Gesture::Drag);
}

#[test]
fn release_without_press_is_a_drag() {
    let mut gestures = GestureClassifier::default();
    assert_eq!(gestures.on_release(Point2::new(0.0, 0.0), 0.0), Gesture::Drag);

    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    gestures.reset();
    assert_eq!(gestures.on_release(Point2::new(0.0, 0.0), 0.0), Gesture::Drag);
}

#[test]
fn non_finite_coordinates_are_a_drag() {
    let mut gestures = GestureClassifier::default();
    gestures.on_press(Point2::new(f64::NAN, 0.0), 0.0);
    assert_eq!(gestures.on_release(Point2::new(0.0, 0.0), 0.1), Gesture::Drag);

    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    assert_eq!(
        gestures.on_release(Point2::new(0.0, f64::INFINITY), 0.1),
        Gesture::Drag
    );
}

#[test]
fn long_hold_is_a_drag_when_guarded() -> Result<()> {
    let mut gestures = GestureClassifier::new(0.05, Some(0.5))?;
    gestures.on_press(Point2::new(0.0, 0.0), 0.0);
    assert_eq!(gestures.on_release(Point2::new(0.0, 0.0), 1.0), Gesture::Drag);

    gestures.on_press(Point2::new(0.0, 0.0), 2.0);
    assert!(matches!(
        gestures.on_release(Point2::new(0.0, 0.0), 2.2),
        Gesture::Click(_)
    ));

    gestures.on_press(Point2::new(0.0, 0.0), f64::NAN);
    assert_eq!(gestures.on_release(Point2::new(0.0, 0.0), 2.2), Gesture::Drag);
    Ok(())
}

#[test]
fn invalid_threshold_is_rejected() {
    assert!(GestureClassifier::new(0.0, None).is_err());
    assert!(GestureClassifier::new(f64::NAN, None).is_err());
    assert!(GestureClassifier::new(0.05, Some(-1.0)).is_err());
}
