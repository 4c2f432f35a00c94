//! Map file loader.
//!
//! Format: a first line holding `cols rows` as whitespace-separated integers,
//! followed by `rows` lines of cell symbols.

use std::path::Path;

use maze_core::Grid;

use crate::loaders::{LoadResult, read_file};
use crate::presets::MapPreset;

/// Loader for text map files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a text file.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    /// Load one of the bundled maps.
    pub fn preset(preset: MapPreset) -> LoadResult<Grid> {
        Self::parse(preset.source())
            .map_err(|e| anyhow::anyhow!("Failed to load preset map {}: {}", preset, e))
    }

    /// Parse map text (header included).
    pub fn parse(content: &str) -> LoadResult<Grid> {
        let (header, body) = content.split_once('\n').unwrap_or((content, ""));

        let mut fields = header.split_whitespace();
        let cols = parse_dimension(fields.next(), "column count")?;
        let rows = parse_dimension(fields.next(), "row count")?;

        let grid = Grid::load(rows, cols, body)
            .map_err(|e| anyhow::anyhow!("Invalid map grid: {}", e))?;

        Ok(grid)
    }
}

fn parse_dimension(field: Option<&str>, name: &str) -> LoadResult<u32> {
    let field = field.ok_or_else(|| anyhow::anyhow!("Map header is missing the {}", name))?;
    field
        .parse()
        .map_err(|e| anyhow::anyhow!("Map header has an invalid {} {:?}: {}", name, field, e))
}
