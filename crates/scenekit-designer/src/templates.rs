//! Built-in starting scenes.
//!
//! - `default_scene`: one shape of every kind
//! - `grid_scene`: a dense grid of rectangles for repaint benchmarks

use crate::model::{Color, Shape};

/// The reference rectangle color.
pub const PRIMARY_BLUE: Color = Color::rgb(0x34, 0x98, 0xdb);

/// One shape of every kind, fitting a 600x400 surface.
pub fn default_scene() -> Vec<Shape> {
    vec![
        Shape::rectangle(100.0, 100.0, 100.0, 100.0, PRIMARY_BLUE),
        Shape::circle(260.0, 80.0, 90.0, 90.0, Color::rgb(0xe7, 0x4c, 0x3c)),
        Shape::triangle(400.0, 90.0, 110.0, 90.0, Color::rgb(0x2e, 0xcc, 0x71)),
        Shape::star(240.0, 230.0, 110.0, 110.0, Color::rgb(0xf1, 0xc4, 0x0f))
            .with_angle(std::f64::consts::PI / 10.0),
        Shape::text("SceneKit", 380.0, 250.0, 160.0, 50.0, Color::rgb(0x2c, 0x3e, 0x50)),
    ]
}

/// `columns` x `rows` rectangles of `size` px with `gap` px between them,
/// cycling through a small palette.
pub fn grid_scene(columns: usize, rows: usize, size: f64, gap: f64) -> Vec<Shape> {
    const PALETTE: [Color; 4] = [
        PRIMARY_BLUE,
        Color::rgb(0xe7, 0x4c, 0x3c),
        Color::rgb(0x2e, 0xcc, 0x71),
        Color::rgb(0x9b, 0x59, 0xb6),
    ];

    (0..rows)
        .flat_map(|row| (0..columns).map(move |col| (row, col)))
        .enumerate()
        .map(|(i, (row, col))| {
            let x = gap + col as f64 * (size + gap);
            let y = gap + row as f64 * (size + gap);
            Shape::rectangle(x, y, size, size, PALETTE[i % PALETTE.len()])
        })
        .collect()
}
