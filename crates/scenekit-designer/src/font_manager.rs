//! System font lookup for text shapes.
//!
//! Fonts are resolved once per family through `fontdb` and leaked into
//! a process-wide cache. A missing font is cached as well so headless hosts
//! do not rescan the system on every repaint.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        db
    })
}

/// Resolves a font, falling back to any sans-serif face when the requested
/// family is not installed.
pub fn get_font_for(family: &str) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(family) {
        return *font;
    }

    let loaded = load_font_from_system(family).or_else(|| load_font_from_system("Sans"));
    if loaded.is_none() {
        tracing::warn!("No font available for '{}', text shapes will not render", family);
    }
    let font_ref = loaded.map(|font| &*Box::leak(Box::new(font)));

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    font_ref
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other)],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
