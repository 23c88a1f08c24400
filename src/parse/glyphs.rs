// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::{smallvec, SmallVec};

pub type GlyphList = SmallVec<[char; 2]>;

/// The recognized glyph dialect, threaded through every recognition stage.
///
/// This is a plain value (no process-wide state) so multiple dialects can run
/// concurrently. The defaults match the classic drawing style: `-`/`=`
/// horizontal strokes, `|` vertical strokes, `+` for corners and junctions,
/// and `^ v < >` arrowheads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub horizontal: GlyphList,
    pub vertical: GlyphList,
    pub corner: GlyphList,
    pub junction: GlyphList,
    pub arrow_up: char,
    pub arrow_down: char,
    pub arrow_left: char,
    pub arrow_right: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            horizontal: smallvec!['-', '='],
            vertical: smallvec!['|'],
            corner: smallvec!['+'],
            junction: smallvec!['+'],
            arrow_up: '^',
            arrow_down: 'v',
            arrow_left: '<',
            arrow_right: '>',
        }
    }
}

impl GlyphSet {
    pub fn is_horizontal(&self, ch: char) -> bool {
        self.horizontal.contains(&ch)
    }

    pub fn is_vertical(&self, ch: char) -> bool {
        self.vertical.contains(&ch)
    }

    pub fn is_corner(&self, ch: char) -> bool {
        self.corner.contains(&ch)
    }

    pub fn is_junction(&self, ch: char) -> bool {
        self.junction.contains(&ch)
    }

    pub fn arrow_direction(&self, ch: char) -> Option<ArrowDirection> {
        if ch == self.arrow_up {
            Some(ArrowDirection::Up)
        } else if ch == self.arrow_down {
            Some(ArrowDirection::Down)
        } else if ch == self.arrow_left {
            Some(ArrowDirection::Left)
        } else if ch == self.arrow_right {
            Some(ArrowDirection::Right)
        } else {
            None
        }
    }

    pub fn is_arrow(&self, ch: char) -> bool {
        self.arrow_direction(ch).is_some()
    }

    /// Whether `ch` is connector material for the tracer at all.
    pub fn is_connector(&self, ch: char) -> bool {
        self.is_horizontal(ch)
            || self.is_vertical(ch)
            || self.is_corner(ch)
            || self.is_junction(ch)
            || self.is_arrow(ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowDirection {
    /// The `(dr, dc)` step the arrowhead points at.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

/// The structural role a connector cell plays within its traced path.
///
/// A `+` (corner/junction glyph) is ambiguous on its own; the tracer resolves
/// it from the orientation of adjacent path cells: two opposite neighbors
/// make it a straight pass-through, two perpendicular neighbors a corner,
/// three or more a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphRole {
    Horizontal,
    Vertical,
    Corner,
    Junction,
    Arrow(ArrowDirection),
}
