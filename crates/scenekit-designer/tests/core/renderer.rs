use scenekit_designer::renderer::{render_scene, shape_footprint, shape_transform, to_rgba_image};
use scenekit_designer::{Color, Point, RenderStyle, Scene, Shape};
use tiny_skia::Pixmap;

fn alpha(pixmap: &Pixmap, x: u32, y: u32) -> u8 {
    pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
}

#[test]
fn test_transform_maps_local_origin_to_rotated_corner() {
    let shape = Shape::rectangle(100.0, 100.0, 100.0, 100.0, Color::BLACK)
        .with_angle(std::f64::consts::FRAC_PI_2);
    let mut points = [tiny_skia::Point::from_xy(0.0, 0.0)];
    shape_transform(&shape).map_points(&mut points);

    let expected = shape.rotate(Point::new(100.0, 100.0));
    assert!((points[0].x as f64 - expected.x).abs() < 1e-3);
    assert!((points[0].y as f64 - expected.y).abs() < 1e-3);
}

#[test]
fn test_paint_order_is_insertion_order() {
    let scene = Scene::new(vec![
        Shape::rectangle(0.0, 0.0, 50.0, 50.0, Color::rgb(255, 0, 0)),
        Shape::rectangle(25.0, 25.0, 50.0, 50.0, Color::rgb(0, 0, 255)),
    ]);
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    render_scene(&mut pixmap, &scene, None, &RenderStyle::default());

    let overlap = pixmap.pixel(40, 40).unwrap().demultiply();
    assert_eq!((overlap.red(), overlap.blue()), (0, 255));
}

#[test]
fn test_every_kind_paints_its_center() {
    let shapes = vec![
        Shape::rectangle(10.0, 10.0, 60.0, 60.0, Color::BLACK),
        Shape::circle(90.0, 10.0, 60.0, 60.0, Color::BLACK),
        Shape::triangle(170.0, 10.0, 60.0, 60.0, Color::BLACK),
        Shape::star(250.0, 10.0, 60.0, 60.0, Color::BLACK),
    ];
    for shape in shapes {
        let c = shape.center();
        let mut pixmap = Pixmap::new(320, 80).unwrap();
        render_scene(
            &mut pixmap,
            &Scene::new(vec![shape.clone()]),
            None,
            &RenderStyle::default(),
        );
        assert_eq!(alpha(&pixmap, c.x as u32, c.y as u32), 255, "{}", shape.kind);
    }
}

#[test]
fn test_triangle_leaves_top_corners_empty() {
    let mut pixmap = Pixmap::new(100, 100).unwrap();
    let scene = Scene::new(vec![Shape::triangle(0.0, 0.0, 100.0, 100.0, Color::BLACK)]);
    render_scene(&mut pixmap, &scene, None, &RenderStyle::default());
    assert_eq!(alpha(&pixmap, 5, 5), 0);
    assert_eq!(alpha(&pixmap, 94, 5), 0);
    assert_eq!(alpha(&pixmap, 50, 95), 255);
}

#[test]
fn test_footprint_follows_rotation() {
    let style = RenderStyle::default();
    let shape = Shape::rectangle(100.0, 100.0, 200.0, 20.0, Color::BLACK);
    let flat = shape_footprint(&shape, &style).unwrap().bounds();
    let turned = shape_footprint(&shape.clone().with_angle(std::f64::consts::FRAC_PI_2), &style)
        .unwrap()
        .bounds();
    assert!(flat.width() > flat.height());
    assert!(turned.height() > turned.width());
}

#[test]
fn test_rgba_image_is_unpremultiplied() {
    let mut pixmap = Pixmap::new(4, 4).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(200, 100, 50, 255));
    let image = to_rgba_image(&pixmap).unwrap();
    assert_eq!(image.get_pixel(2, 2).0, [200, 100, 50, 255]);
}
