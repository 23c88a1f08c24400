// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The diagram-recognition pipeline.
//!
//! Five stages run in order over one immutable grid: load, region scan,
//! connector trace, endpoint resolution, graph assembly. Each stage consumes
//! the full output of its predecessor; there is no shared state between
//! calls, so the engine is re-entrant.

use std::fmt;

use crate::model::Graph;

mod assemble;
pub mod glyphs;
pub mod grid;
mod paths;
mod regions;
mod resolve;
#[cfg(test)]
mod tests;

pub use glyphs::{ArrowDirection, GlyphRole, GlyphSet};
pub use grid::{Cell, Grid};

/// Per-call recognition configuration.
///
/// A plain value threaded through every stage; never process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// The recognized glyph dialect.
    pub glyphs: GlyphSet,
    /// Hard cap on `width × height`; exceeding it is the one caller-visible
    /// failure. `None` accepts any size that fits in memory.
    pub max_cells: Option<usize>,
    /// How far (in cells) from a path midpoint inline edge labels are
    /// collected.
    pub label_margin: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::default(),
            max_cells: None,
            label_margin: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDiagramError {
    OversizedInput { cells: usize, max_cells: usize },
}

impl fmt::Display for ParseDiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OversizedInput { cells, max_cells } => write!(
                f,
                "diagram grid has {cells} cells, exceeding the configured limit of {max_cells}"
            ),
        }
    }
}

impl std::error::Error for ParseDiagramError {}

/// Parses an ASCII diagram with default options.
///
/// Empty input yields an empty graph, not an error. Irregular art (stray
/// glyphs, unclosed borders, dangling connectors) is absorbed per the
/// best-effort policies of the individual stages; parsing never fails on
/// diagram content.
pub fn parse_diagram(text: &str) -> Result<Graph, ParseDiagramError> {
    parse_diagram_with(text, &ParseOptions::default())
}

/// Parses an ASCII diagram with an explicit glyph dialect and limits.
pub fn parse_diagram_with(text: &str, options: &ParseOptions) -> Result<Graph, ParseDiagramError> {
    let grid = Grid::from_text(text);
    if let Some(max_cells) = options.max_cells {
        if grid.cell_count() > max_cells {
            return Err(ParseDiagramError::OversizedInput {
                cells: grid.cell_count(),
                max_cells,
            });
        }
    }

    let (regions, map) = regions::scan_regions(&grid, &options.glyphs);
    let paths = paths::trace_paths(&grid, &options.glyphs, &map);
    let candidates = resolve::resolve_edges(&grid, options, &regions, &map, &paths);
    Ok(assemble::assemble(&regions, candidates))
}
