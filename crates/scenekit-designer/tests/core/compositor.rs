use scenekit_designer::renderer::render_scene;
use scenekit_designer::{
    templates, Canvas, DualSurface, MountConfig, RenderStyle, RepaintStats, RepaintStrategy,
    Scene, SingleSurface,
};
use tiny_skia::Pixmap;

fn drag_session(canvas: &mut Canvas) {
    canvas.pointer_down((150.0, 150.0));
    for step in 1..=20 {
        canvas.pointer_move((150.0 + step as f64 * 5.0, 150.0 + step as f64 * 2.0));
    }
    canvas.pointer_up();
}

fn full_render(canvas: &Canvas) -> Pixmap {
    let (w, h) = canvas.size();
    let mut pixmap = Pixmap::new(w, h).unwrap();
    render_scene(&mut pixmap, canvas.scene(), canvas.selected_index(), &RenderStyle::default());
    pixmap
}

#[test]
fn test_dual_surface_avoids_static_repaints_while_dragging() {
    let config = MountConfig::new(templates::default_scene());
    let mut single = Canvas::single_surface(config.clone(), RenderStyle::default());
    let mut dual = Canvas::dual_surface(config, RenderStyle::default());
    single.mount();
    dual.mount();

    drag_session(&mut single);
    drag_session(&mut dual);

    assert_eq!(single.shapes(), dual.shapes());
    assert_eq!(
        single.stats(),
        RepaintStats {
            static_repaints: 22,
            overlay_repaints: 0
        }
    );
    assert_eq!(
        dual.stats(),
        RepaintStats {
            static_repaints: 2,
            overlay_repaints: 21
        }
    );
}

#[test]
fn test_both_strategies_commit_to_full_render() {
    let config = MountConfig::new(templates::default_scene());
    for mut canvas in [
        Canvas::single_surface(config.clone(), RenderStyle::default()),
        Canvas::dual_surface(config.clone(), RenderStyle::default()),
    ] {
        canvas.mount();
        drag_session(&mut canvas);
        // Deselect on empty space, then drag the circle.
        canvas.pointer_down((5.0, 5.0));
        canvas.pointer_down((305.0, 125.0));
        canvas.pointer_move((320.0, 140.0));
        canvas.pointer_up();

        let composite = canvas.composite().unwrap();
        assert!(
            composite == full_render(&canvas),
            "{} differs from a full render",
            canvas.strategy_name()
        );
    }
}

#[test]
fn test_mid_gesture_composite_shows_every_shape() {
    let scene = Scene::new(templates::default_scene());
    let style = RenderStyle::default();
    let mut dual = DualSurface::new(style.clone());
    dual.mount(600, 400, &scene, None);
    dual.gesture_started(&scene, 0);

    // Nothing has moved yet, so the composite is the selected full render.
    let mut expected = Pixmap::new(600, 400).unwrap();
    render_scene(&mut expected, &scene, Some(0), &style);
    let composite = dual.composite().unwrap();

    let differing = composite
        .pixels()
        .iter()
        .zip(expected.pixels())
        .filter(|(a, b)| {
            let (a, b) = (a.demultiply(), b.demultiply());
            (a.alpha() as i32 - b.alpha() as i32).abs() > 2
        })
        .count();
    // Anti-aliased edges blended across two layers may round differently.
    assert!(differing < 200, "{} pixels differ", differing);
}

#[test]
fn test_single_surface_direct() {
    let scene = Scene::new(templates::default_scene());
    let mut single = SingleSurface::new(RenderStyle::default());
    assert!(!single.is_mounted());
    assert!(single.mount(600, 400, &scene, None));
    single.selection_changed(&scene, Some(2));
    assert_eq!(single.stats().static_repaints, 2);
    single.unmount();
    assert!(single.composite().is_none());
}
