// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A `(row, col)` grid coordinate, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps by a signed offset; `None` when the step would leave quadrant 0.
    pub fn step(self, dr: isize, dc: isize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Cell { row, col })
    }

    /// The up-to-four 4-connected neighbors, in reading order.
    pub fn neighbors4(self) -> impl Iterator<Item = Cell> {
        [(-1, 0), (0, -1), (0, 1), (1, 0)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.step(dr, dc))
    }
}

/// An immutable 2D character grid.
///
/// Every row has identical length; short input lines are right-padded with
/// spaces. A grid built from empty text has zero width and height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn from_text(text: &str) -> Self {
        let lines = text.lines().collect::<Vec<_>>();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let height = if width == 0 { 0 } else { lines.len() };

        let mut cells = Vec::with_capacity(width * height);
        for line in lines.iter().take(height) {
            let mut len = 0usize;
            for ch in line.chars() {
                cells.push(ch);
                len += 1;
            }
            cells.resize(cells.len() + (width - len), ' ');
        }

        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.cells[cell.row * self.width + cell.col])
    }

    /// Flat index for per-cell side tables (claim maps, visited sets).
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row * self.width + cell.col
    }

    /// All cells in row-major (reading) order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell { row, col }))
    }
}
