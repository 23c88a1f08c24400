// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::glyphs::GlyphRole;
use super::grid::{Cell, Grid};
use super::paths::ConnectorPath;
use super::regions::{NodeRegion, RegionMap};
use super::ParseOptions;

/// A provisional edge produced from one resolved connector path, before id
/// assignment. `source`/`target` are region indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CandidateEdge {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) directed: bool,
    pub(crate) label: Option<String>,
    pub(crate) path: usize,
    pub(crate) length: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct Attachment {
    via_arrow: bool,
    via_plain: bool,
}

/// Resolves every connector path against region borders.
///
/// An endpoint (or junction cell) attaches to every region whose border it
/// touches with a zero-cell gap; when several borders are equally adjacent
/// the path attaches to all of them rather than picking a winner. One
/// candidate edge is produced per distinct pair of attached regions. A path
/// touching fewer than two regions is dropped silently.
pub(crate) fn resolve_edges(
    grid: &Grid,
    options: &ParseOptions,
    regions: &[NodeRegion],
    map: &RegionMap,
    paths: &[ConnectorPath],
) -> Vec<CandidateEdge> {
    let mut on_path = vec![false; grid.cell_count()];
    for path in paths {
        for &cell in path.cells() {
            on_path[grid.index_of(cell)] = true;
        }
    }

    let mut candidates = Vec::new();
    for (path_index, path) in paths.iter().enumerate() {
        let mut attachments = BTreeMap::<usize, Attachment>::new();

        for (cell, role) in path.endpoints() {
            let via_arrow = matches!(role, GlyphRole::Arrow(_));
            for region in adjacent_borders(regions, map, cell) {
                let entry = attachments.entry(region).or_default();
                if via_arrow {
                    entry.via_arrow = true;
                } else {
                    entry.via_plain = true;
                }
            }
        }
        for cell in path.junction_cells() {
            for region in adjacent_borders(regions, map, cell) {
                attachments.entry(region).or_default().via_plain = true;
            }
        }

        if attachments.len() < 2 {
            continue;
        }

        let label = find_label(grid, map, &on_path, options, path.midpoint());

        let attached = attachments.into_iter().collect::<Vec<_>>();
        for (i, &(a, at_a)) in attached.iter().enumerate() {
            for &(b, at_b) in &attached[i + 1..] {
                // Exactly one arrowhead side makes the edge directed toward
                // it; both or neither resolves to the simpler undirected
                // reading.
                let (source, target, directed) = match (at_a.via_arrow, at_b.via_arrow) {
                    (false, true) => (a, b, true),
                    (true, false) => (b, a, true),
                    _ => (a, b, false),
                };
                candidates.push(CandidateEdge {
                    source,
                    target,
                    directed,
                    label: label.clone(),
                    path: path_index,
                    length: path.len(),
                });
            }
        }
    }

    candidates
}

/// Regions whose border is 4-adjacent to `cell`, deduplicated, in a
/// deterministic order.
fn adjacent_borders(
    regions: &[NodeRegion],
    map: &RegionMap,
    cell: Cell,
) -> impl Iterator<Item = usize> {
    let mut found = smallvec::SmallVec::<[usize; 2]>::new();
    for neighbor in cell.neighbors4() {
        if let Some(region) = map.region_at(neighbor) {
            if regions[region].on_border(neighbor) && !found.contains(&region) {
                found.push(region);
            }
        }
    }
    found.into_iter()
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+").expect("valid word pattern"))
}

/// Inline edge label discovery: free text fragments within the margin window
/// around the path midpoint, concatenated in reading order.
///
/// Region and connector cells are blanked before matching so a fragment is
/// never swallowed by an adjacent stroke; a fragment that intersects the
/// column window is captured whole.
fn find_label(
    grid: &Grid,
    map: &RegionMap,
    on_path: &[bool],
    options: &ParseOptions,
    midpoint: Cell,
) -> Option<String> {
    if grid.height() == 0 {
        return None;
    }
    let margin = options.label_margin;
    let row_first = midpoint.row.saturating_sub(margin);
    let row_last = (midpoint.row + margin).min(grid.height() - 1);
    let col_first = midpoint.col.saturating_sub(margin);
    let col_last = (midpoint.col + margin).min(grid.width().saturating_sub(1));

    let mut fragments = Vec::<(usize, usize, String)>::new();
    for row in row_first..=row_last {
        let mut masked = String::with_capacity(grid.width());
        for col in 0..grid.width() {
            let cell = Cell::new(row, col);
            let ch = grid.get(cell).unwrap_or(' ');
            if map.is_claimed(cell) || on_path[grid.index_of(cell)] || ch.is_control() {
                masked.push(' ');
            } else {
                masked.push(ch);
            }
        }

        for found in word_pattern().find_iter(&masked) {
            let start_col = masked[..found.start()].chars().count();
            let text = found.as_str();
            let end_col = start_col + text.chars().count() - 1;
            if end_col < col_first || start_col > col_last {
                continue;
            }
            fragments.push((row, start_col, text.to_owned()));
        }
    }

    if fragments.is_empty() {
        return None;
    }
    fragments.sort();
    Some(
        fragments
            .into_iter()
            .map(|(_, _, text)| text)
            .collect::<Vec<_>>()
            .join(" "),
    )
}
