use scenekit_core::GestureKind;
use scenekit_designer::gesture::{pointer_angle, resize, AnchorSnapshot};
use scenekit_designer::{Color, Corner, GestureState, HitTarget, Point, Shape};

fn square() -> Shape {
    Shape::rectangle(100.0, 100.0, 100.0, 100.0, Color::rgb(0x34, 0x98, 0xdb))
}

#[test]
fn test_resize_top_right_scenario() {
    let shape = square();
    let down = Point::new(204.0, 96.0);
    let mut state = GestureState::begin(HitTarget::Resize(Corner::TopRight), down, &shape);
    assert_eq!(state.kind(), Some(GestureKind::Resize));

    let out = state
        .update(&shape, Point::new(down.x + 20.0, down.y - 10.0))
        .unwrap();
    assert_eq!(out.x, 100.0);
    assert_eq!(out.y, 90.0);
    assert_eq!(out.width, 120.0);
    assert_eq!(out.height, 110.0);
}

#[test]
fn test_resize_is_relative_to_gesture_start() {
    // Two moves from the same anchor: the second replaces the first rather
    // than adding to it.
    let shape = square();
    let mut state = GestureState::begin(
        HitTarget::Resize(Corner::BottomRight),
        Point::new(200.0, 200.0),
        &shape,
    );
    let first = state.update(&shape, Point::new(230.0, 230.0)).unwrap();
    let second = state.update(&first, Point::new(210.0, 205.0)).unwrap();
    assert_eq!((second.width, second.height), (110.0, 105.0));
}

#[test]
fn test_rotate_handle_sweep() {
    let shape = square();
    let center = shape.center();
    let mut state = GestureState::begin(HitTarget::Rotate, Point::new(150.0, 70.0), &shape);
    assert!(matches!(state, GestureState::Rotating { .. }));

    let mut current = shape.clone();
    for step in 1..=8 {
        let a = -std::f64::consts::FRAC_PI_2 + step as f64 * std::f64::consts::FRAC_PI_4;
        let p = Point::new(center.x + 80.0 * a.cos(), center.y + 80.0 * a.sin());
        current = state.update(&current, p).unwrap();
    }
    let turns = current.angle / std::f64::consts::TAU;
    assert!((turns - turns.round()).abs() < 1e-9, "angle {}", current.angle);
}

#[test]
fn test_pointer_angle_quadrants() {
    let c = Point::new(0.0, 0.0);
    assert_eq!(pointer_angle(c, Point::new(1.0, 0.0)), 0.0);
    assert!((pointer_angle(c, Point::new(0.0, 1.0)) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((pointer_angle(c, Point::new(-1.0, 0.0)) - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn test_resize_keeps_kind_color_and_angle() {
    let shape = Shape::star(10.0, 10.0, 50.0, 50.0, Color::rgb(1, 2, 3)).with_angle(0.5);
    let snap = AnchorSnapshot::from(&shape);
    let out = resize(
        &shape,
        &snap,
        Corner::TopLeft,
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
    );
    assert_eq!(out.kind, shape.kind);
    assert_eq!(out.color, shape.color);
    assert_eq!(out.angle, 0.5);
}
