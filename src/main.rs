use scenekit::designer::templates;
use std::path::PathBuf;

use scenekit::{
    canvas_with_strategy, init_logging, load_config, Canvas, RenderStrategy, BUILD_DATE, VERSION,
};

/// One scripted pointer session: drag the rectangle, resize it from the
/// bottom-right corner, then spin it with the rotate handle.
fn run_session(canvas: &mut Canvas) {
    canvas.pointer_down((150.0, 150.0));
    for step in 1..=24 {
        canvas.pointer_move((150.0 + 2.0 * step as f64, 150.0 + step as f64));
    }
    canvas.pointer_up();

    // Rectangle now spans (148, 124) - (248, 224).
    canvas.pointer_down((252.0, 228.0));
    for step in 1..=12 {
        canvas.pointer_move((252.0 + 2.0 * step as f64, 228.0 + 2.0 * step as f64));
    }
    canvas.pointer_up();

    // Rotate handle sits 30px above the top edge midpoint.
    let (cx, top) = {
        let rect = &canvas.shapes()[0];
        (rect.x + rect.width / 2.0, rect.y)
    };
    let center_y = top + canvas.shapes()[0].height / 2.0;
    let radius = center_y - (top - 30.0);
    canvas.pointer_down((cx, top - 30.0));
    for step in 1..=18 {
        let a = -std::f64::consts::FRAC_PI_2 + step as f64 * std::f64::consts::PI / 36.0;
        canvas.pointer_move((cx + radius * a.cos(), center_y + radius * a.sin()));
    }
    canvas.pointer_leave();

    // Click on empty space to drop the selection.
    canvas.pointer_down((5.0, 5.0));
    canvas.pointer_up();
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("SceneKit {} (built {})", VERSION, BUILD_DATE);

    // Optional config file path as the first argument.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    let output_dir = config.export.output_dir.as_path();

    for strategy in [RenderStrategy::SingleSurface, RenderStrategy::DualSurface] {
        let mut canvas = canvas_with_strategy(&config, templates::default_scene(), strategy);
        if !canvas.mount() {
            anyhow::bail!(
                "cannot mount a {}x{} surface",
                config.surface.width,
                config.surface.height
            );
        }

        run_session(&mut canvas);

        let stats = canvas.stats();
        tracing::info!(
            "{}: {} static repaints, {} overlay repaints, cursor {}",
            strategy,
            stats.static_repaints,
            stats.overlay_repaints,
            canvas.cursor()
        );

        canvas.export_png(&output_dir.join(format!("{}.png", canvas.strategy_name())))?;
    }

    Ok(())
}
