use scenekit_core::{CursorMode, EditorEvent};
use scenekit_designer::{
    templates, Canvas, CanvasPoint, Color, GestureState, MountConfig, PointerEvent, RenderStyle,
    Shape,
};

fn blue_square_canvas() -> Canvas {
    let shapes = vec![Shape::rectangle(
        100.0,
        100.0,
        100.0,
        100.0,
        Color::rgb(0x34, 0x98, 0xdb),
    )];
    let mut canvas = Canvas::dual_surface(MountConfig::new(shapes), RenderStyle::default());
    canvas.mount();
    canvas
}

#[test]
fn test_mount_uses_configured_size() {
    let mut canvas = Canvas::single_surface(
        MountConfig::new(templates::default_scene()).with_size(320, 240),
        RenderStyle::default(),
    );
    assert!(canvas.mount());
    let pixmap = canvas.composite().unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (320, 240));
    assert_eq!(canvas.strategy_name(), "single-surface");
}

#[test]
fn test_zero_sized_mount_fails() {
    let mut canvas = Canvas::dual_surface(
        MountConfig::new(Vec::new()).with_size(0, 100),
        RenderStyle::default(),
    );
    assert!(!canvas.mount());
    assert!(!canvas.is_mounted());
    assert_eq!(canvas.static_render_count(), 0);
}

#[test]
fn test_pointer_event_dispatch() {
    let mut canvas = blue_square_canvas();
    canvas.handle_pointer(PointerEvent::Down(CanvasPoint::new(150.0, 150.0)));
    canvas.handle_pointer(PointerEvent::Move(CanvasPoint::new(160.0, 170.0)));
    canvas.handle_pointer(PointerEvent::Up);

    let shape = &canvas.shapes()[0];
    assert_eq!((shape.x, shape.y), (110.0, 120.0));
    assert_eq!(canvas.gesture(), &GestureState::Idle);
}

#[test]
fn test_rotate_through_canvas() {
    let mut canvas = blue_square_canvas();
    // Rotate handle sits 30px above the top edge midpoint.
    canvas.pointer_down((150.0, 70.0));
    assert!(matches!(canvas.gesture(), GestureState::Rotating { .. }));
    // Swing the pointer to the right of the center: a quarter turn clockwise.
    canvas.pointer_move((230.0, 150.0));
    canvas.pointer_up();

    let angle = canvas.shapes()[0].angle;
    assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-9, "angle {}", angle);
    assert_eq!(canvas.cursor(), CursorMode::Grab);
}

#[test]
fn test_grabbing_another_shape_switches_selection() {
    let shapes = vec![
        Shape::rectangle(10.0, 10.0, 50.0, 50.0, Color::BLACK),
        Shape::rectangle(200.0, 200.0, 50.0, 50.0, Color::BLACK),
    ];
    let mut canvas = Canvas::dual_surface(MountConfig::new(shapes), RenderStyle::default());
    canvas.mount();
    let mut rx = canvas.subscribe();

    canvas.pointer_down((30.0, 30.0));
    canvas.pointer_up();
    canvas.pointer_down((220.0, 220.0));
    canvas.pointer_up();
    assert_eq!(canvas.selected_index(), Some(1));

    let selections: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|e| match e {
            EditorEvent::SelectionChanged(s) => Some(s),
            _ => None,
        })
        .collect();
    assert_eq!(selections, vec![Some(0), Some(1)]);
}

#[test]
fn test_static_count_is_monotonic() {
    let mut canvas = blue_square_canvas();
    let mut last = canvas.static_render_count();
    let script = [
        PointerEvent::Down(CanvasPoint::new(150.0, 150.0)),
        PointerEvent::Move(CanvasPoint::new(170.0, 150.0)),
        PointerEvent::Up,
        PointerEvent::Down(CanvasPoint::new(5.0, 5.0)),
        PointerEvent::Down(CanvasPoint::new(180.0, 160.0)),
        PointerEvent::Leave,
    ];
    for event in script {
        canvas.handle_pointer(event);
        let now = canvas.static_render_count();
        assert!(now >= last);
        last = now;
    }
    // Mount, first commit, deselect, second commit.
    assert_eq!(last, 4);
}
