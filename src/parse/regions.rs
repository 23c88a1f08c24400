// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::glyphs::GlyphSet;
use super::grid::{Cell, Grid};

/// A bordered rectangular block recognized as one graph node.
///
/// Bounds are inclusive and cover the border; the interior is everything
/// strictly inside. Regions never overlap and never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRegion {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
    label: String,
}

impl NodeRegion {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn top_left(&self) -> Cell {
        Cell::new(self.top, self.left)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.top..=self.bottom).contains(&cell.row)
            && (self.left..=self.right).contains(&cell.col)
    }

    pub fn on_border(&self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.row == self.top
                || cell.row == self.bottom
                || cell.col == self.left
                || cell.col == self.right)
    }
}

/// Per-cell region ownership, indexed like the grid.
#[derive(Debug, Clone)]
pub(crate) struct RegionMap {
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl RegionMap {
    fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: vec![None; grid.cell_count()],
        }
    }

    pub(crate) fn region_at(&self, cell: Cell) -> Option<usize> {
        if cell.row >= self.height || cell.col >= self.width {
            return None;
        }
        self.cells[cell.row * self.width + cell.col]
    }

    pub(crate) fn is_claimed(&self, cell: Cell) -> bool {
        self.region_at(cell).is_some()
    }

    fn set(&mut self, cell: Cell, region: Option<usize>) {
        let index = cell.row * self.width + cell.col;
        self.cells[index] = region;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Rect {
    fn overlaps(&self, other: &Rect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    /// Strictly inside `other`'s interior, border included in the test.
    fn nested_in(&self, other: &Rect) -> bool {
        self.top > other.top
            && self.left > other.left
            && self.bottom < other.bottom
            && self.right < other.right
    }

    fn border_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let top = (self.left..=self.right).map(move |col| Cell::new(self.top, col));
        let bottom = (self.left..=self.right).map(move |col| Cell::new(self.bottom, col));
        let left = (self.top + 1..self.bottom).map(move |row| Cell::new(row, self.left));
        let right = (self.top + 1..self.bottom).map(move |row| Cell::new(row, self.right));
        top.chain(bottom).chain(left).chain(right)
    }
}

/// Enumerates node regions and the cells they claim.
///
/// Row-major scan: every cell matching a corner glyph is tried as a top-left
/// corner and the full border verified. A shape whose border cannot be closed
/// is not an error; its glyphs simply fall through to the connector tracer.
/// Verified rectangles are accepted first-wins in discovery order; a later
/// rectangle overlapping an accepted one is rejected, and if it nests inside
/// an accepted interior its border cells are released to the tracer.
pub(crate) fn scan_regions(grid: &Grid, glyphs: &GlyphSet) -> (Vec<NodeRegion>, RegionMap) {
    let mut candidates = Vec::<Rect>::new();
    for cell in grid.cells() {
        let ch = grid.get(cell).unwrap_or(' ');
        if !glyphs.is_corner(ch) {
            continue;
        }
        if let Some(rect) = grow_rect(grid, glyphs, cell) {
            candidates.push(rect);
        }
    }

    let mut accepted = Vec::<Rect>::new();
    let mut rejected = Vec::<Rect>::new();
    for rect in candidates {
        if accepted.iter().any(|kept| kept.overlaps(&rect)) {
            rejected.push(rect);
        } else {
            accepted.push(rect);
        }
    }

    let mut map = RegionMap::new(grid);
    for (index, rect) in accepted.iter().enumerate() {
        for row in rect.top..=rect.bottom {
            for col in rect.left..=rect.right {
                map.set(Cell::new(row, col), Some(index));
            }
        }
    }
    // Nested borders are not nodes; hand their glyphs back to the tracer.
    for rect in &rejected {
        if accepted.iter().any(|kept| rect.nested_in(kept)) {
            for cell in rect.border_cells() {
                map.set(cell, None);
            }
        }
    }

    let regions = accepted
        .iter()
        .enumerate()
        .map(|(index, rect)| NodeRegion {
            top: rect.top,
            left: rect.left,
            bottom: rect.bottom,
            right: rect.right,
            label: interior_label(grid, &map, rect, index),
        })
        .collect();

    (regions, map)
}

/// Verifies a full rectangular border starting from a candidate top-left
/// corner. `None` when no matching opposite corner closes the shape within
/// grid bounds, or when the footprint is smaller than 3×3.
fn grow_rect(grid: &Grid, glyphs: &GlyphSet, top_left: Cell) -> Option<Rect> {
    let Cell { row: top, col: left } = top_left;

    let mut right = left + 1;
    while matches!(grid.get(Cell::new(top, right)), Some(ch) if glyphs.is_horizontal(ch)) {
        right += 1;
    }
    if right == left + 1 || !matches!(grid.get(Cell::new(top, right)), Some(ch) if glyphs.is_corner(ch)) {
        return None;
    }

    let mut bottom = top + 1;
    while matches!(grid.get(Cell::new(bottom, left)), Some(ch) if glyphs.is_vertical(ch)) {
        bottom += 1;
    }
    if bottom == top + 1
        || !matches!(grid.get(Cell::new(bottom, left)), Some(ch) if glyphs.is_corner(ch))
    {
        return None;
    }

    if !matches!(grid.get(Cell::new(bottom, right)), Some(ch) if glyphs.is_corner(ch)) {
        return None;
    }
    for col in left + 1..right {
        if !matches!(grid.get(Cell::new(bottom, col)), Some(ch) if glyphs.is_horizontal(ch)) {
            return None;
        }
    }
    for row in top + 1..bottom {
        if !matches!(grid.get(Cell::new(row, right)), Some(ch) if glyphs.is_vertical(ch)) {
            return None;
        }
    }

    Some(Rect { top, left, bottom, right })
}

/// Interior text: lines trimmed, blank lines dropped, joined with one space.
/// Cells released to the tracer (nested inner borders) read as blanks.
fn interior_label(grid: &Grid, map: &RegionMap, rect: &Rect, region: usize) -> String {
    let mut lines = Vec::<String>::new();
    for row in rect.top + 1..rect.bottom {
        let mut line = String::new();
        for col in rect.left + 1..rect.right {
            let cell = Cell::new(row, col);
            let ch = match map.region_at(cell) {
                Some(owner) if owner == region => grid.get(cell).unwrap_or(' '),
                _ => ' ',
            };
            line.push(ch);
        }
        let line = line.trim().to_owned();
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines.join(" ")
}
