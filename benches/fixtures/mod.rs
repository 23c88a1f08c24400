// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use undine::model::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumChain,
    LargeGrid,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumChain => "medium_chain",
            Self::LargeGrid => "large_grid",
        }
    }
}

pub fn fixture(case: Case) -> String {
    match case {
        Case::Small => chain(2),
        Case::MediumChain => chain(24),
        Case::LargeGrid => stacked_chains(12, 10),
    }
}

/// `boxes` nodes in one horizontal row, each linked to the next with a
/// directed run.
pub fn chain(boxes: usize) -> String {
    let mut top = String::new();
    let mut mid = String::new();
    let mut bottom = String::new();
    for index in 0..boxes {
        top.push_str("+-------+");
        mid.push_str(&format!("| N{index:04} |"));
        bottom.push_str("+-------+");
        if index + 1 < boxes {
            top.push_str("    ");
            mid.push_str("--->");
            bottom.push_str("    ");
        }
    }
    format!("{top}\n{mid}\n{bottom}\n")
}

/// `rows` chains of `boxes` nodes stacked vertically, each row's first box
/// linked down to the next row's first box.
pub fn stacked_chains(rows: usize, boxes: usize) -> String {
    let mut out = String::new();
    for row in 0..rows {
        out.push_str(&chain(boxes));
        if row + 1 < rows {
            out.push_str("   |\n");
            out.push_str("   v\n");
        }
    }
    out
}

/// Order-sensitive structural digest; keeps the optimizer honest without
/// hashing full labels.
pub fn checksum(graph: &Graph) -> u64 {
    let mut digest = 0xcbf2_9ce4_8422_2325u64;
    for node in graph.nodes() {
        digest = digest
            .wrapping_mul(0x100_0000_01b3)
            .wrapping_add(node.label().len() as u64);
    }
    for edge in graph.edges() {
        digest = digest
            .wrapping_mul(0x100_0000_01b3)
            .wrapping_add(edge.length() as u64)
            .wrapping_add(u64::from(edge.directed()));
    }
    digest
}
