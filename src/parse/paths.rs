// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use smallvec::SmallVec;

use super::glyphs::{GlyphRole, GlyphSet};
use super::grid::{Cell, Grid};
use super::regions::RegionMap;

/// One unbroken connector stroke: a 4-connected component of line-drawing
/// glyphs outside every node region.
///
/// Cells are stored in walk order (consecutive cells of an unbranched stroke
/// are adjacent); each cell carries the structural role derived from its
/// glyph and its neighbors within the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConnectorPath {
    cells: Vec<Cell>,
    roles: Vec<GlyphRole>,
    endpoints: SmallVec<[usize; 2]>,
    junctions: Vec<usize>,
}

impl ConnectorPath {
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn midpoint(&self) -> Cell {
        self.cells[self.cells.len() / 2]
    }

    /// Loose ends of the stroke (component degree ≤ 1) with their roles.
    pub(crate) fn endpoints(&self) -> impl Iterator<Item = (Cell, GlyphRole)> + '_ {
        self.endpoints
            .iter()
            .map(move |&index| (self.cells[index], self.roles[index]))
    }

    /// Cells where the stroke fans out (three or more path neighbors).
    pub(crate) fn junction_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.junctions.iter().map(move |&index| self.cells[index])
    }
}

/// Enumerates connector paths over all cells not claimed by a node region.
///
/// Explicit-worklist flood fill; no recursion. Arrowhead cells are terminal:
/// the fill enters them but never expands through them, so an arrow-shaped
/// character sitting in free text cannot weld two unrelated strokes (an
/// isolated one forms a one-cell path that later resolves to nothing).
pub(crate) fn trace_paths(grid: &Grid, glyphs: &GlyphSet, map: &RegionMap) -> Vec<ConnectorPath> {
    let mut visited = vec![false; grid.cell_count()];
    let mut paths = Vec::new();

    for seed in grid.cells() {
        if visited[grid.index_of(seed)] || map.is_claimed(seed) {
            continue;
        }
        let ch = grid.get(seed).unwrap_or(' ');
        if !glyphs.is_connector(ch) || glyphs.is_arrow(ch) {
            continue;
        }

        let component = fill_component(grid, glyphs, map, &mut visited, seed);
        paths.push(build_path(grid, glyphs, component));
    }

    paths
}

fn fill_component(
    grid: &Grid,
    glyphs: &GlyphSet,
    map: &RegionMap,
    visited: &mut [bool],
    seed: Cell,
) -> HashSet<Cell> {
    let mut component = HashSet::new();
    let mut worklist = vec![seed];
    visited[grid.index_of(seed)] = true;

    while let Some(cell) = worklist.pop() {
        component.insert(cell);

        let ch = grid.get(cell).unwrap_or(' ');
        if glyphs.is_arrow(ch) {
            continue;
        }

        for next in cell.neighbors4() {
            if !grid.contains(next) || visited[grid.index_of(next)] || map.is_claimed(next) {
                continue;
            }
            let next_ch = grid.get(next).unwrap_or(' ');
            if !glyphs.is_connector(next_ch) {
                continue;
            }
            visited[grid.index_of(next)] = true;
            worklist.push(next);
        }
    }

    component
}

fn build_path(grid: &Grid, glyphs: &GlyphSet, component: HashSet<Cell>) -> ConnectorPath {
    let degree = |cell: Cell| cell.neighbors4().filter(|n| component.contains(n)).count();

    // Walk from a loose end when there is one so unbranched strokes come out
    // in stroke order; closed loops start anywhere deterministic.
    let start = component
        .iter()
        .copied()
        .filter(|&cell| degree(cell) <= 1)
        .min()
        .or_else(|| component.iter().copied().min())
        .unwrap_or(Cell::new(0, 0));

    let mut cells = Vec::with_capacity(component.len());
    let mut seen = HashSet::with_capacity(component.len());
    let mut stack = vec![start];
    seen.insert(start);
    while let Some(cell) = stack.pop() {
        cells.push(cell);
        for next in cell.neighbors4() {
            if component.contains(&next) && seen.insert(next) {
                stack.push(next);
            }
        }
    }

    let mut roles = Vec::with_capacity(cells.len());
    let mut endpoints = SmallVec::new();
    let mut junctions = Vec::new();
    for (index, &cell) in cells.iter().enumerate() {
        let ch = grid.get(cell).unwrap_or(' ');
        let role = role_of(glyphs, ch, cell, &component);
        if matches!(role, GlyphRole::Junction) {
            junctions.push(index);
        }
        roles.push(role);
        if degree(cell) <= 1 {
            endpoints.push(index);
        }
    }

    ConnectorPath { cells, roles, endpoints, junctions }
}

/// Resolves the structural role of one connector cell.
///
/// Arrowheads win outright. A corner/junction glyph is read from the
/// orientation of its path neighbors: two opposite neighbors make it a
/// straight pass-through, three or more a junction, anything else a corner.
fn role_of(glyphs: &GlyphSet, ch: char, cell: Cell, component: &HashSet<Cell>) -> GlyphRole {
    if let Some(direction) = glyphs.arrow_direction(ch) {
        return GlyphRole::Arrow(direction);
    }

    if glyphs.is_corner(ch) || glyphs.is_junction(ch) {
        let up = cell.step(-1, 0).is_some_and(|n| component.contains(&n));
        let down = cell.step(1, 0).is_some_and(|n| component.contains(&n));
        let left = cell.step(0, -1).is_some_and(|n| component.contains(&n));
        let right = cell.step(0, 1).is_some_and(|n| component.contains(&n));
        let count = usize::from(up) + usize::from(down) + usize::from(left) + usize::from(right);
        return match count {
            3 | 4 => GlyphRole::Junction,
            2 if up && down => GlyphRole::Vertical,
            2 if left && right => GlyphRole::Horizontal,
            _ => GlyphRole::Corner,
        };
    }

    if glyphs.is_horizontal(ch) {
        GlyphRole::Horizontal
    } else if glyphs.is_vertical(ch) {
        GlyphRole::Vertical
    } else {
        // Unreachable for cells admitted by the fill; treat as a corner stub.
        GlyphRole::Corner
    }
}
