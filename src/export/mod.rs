// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thin adapters over the neutral graph.
//!
//! The core emits only [`crate::model::Graph`]; everything host-facing —
//! JSON, a plain edge-list — lives here. None of these touch the file
//! system.

use serde::{Deserialize, Serialize};

use crate::model::Graph;

/// Serialization-friendly mirror of [`Graph`], stable field names, node and
/// edge order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeDocument>,
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDocument {
    pub id: String,
    pub label: String,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: String,
    pub target: String,
    pub directed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub length: usize,
}

pub fn to_document(graph: &Graph) -> GraphDocument {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let (row, col) = node.position();
            NodeDocument {
                id: node.id().to_string(),
                label: node.label().to_owned(),
                row,
                col,
            }
        })
        .collect();
    let edges = graph
        .edges()
        .iter()
        .map(|edge| EdgeDocument {
            source: edge.source().to_string(),
            target: edge.target().to_string(),
            directed: edge.directed(),
            label: edge.label().map(str::to_owned),
            length: edge.length(),
        })
        .collect();
    GraphDocument { nodes, edges }
}

pub fn export_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_document(graph))
}

/// Plain deterministic edge-list text, one entity per line:
/// `node <id> <label>` then `edge <source> -- <target>` (`->` when
/// directed), with the label appended when present.
pub fn export_edge_list(graph: &Graph) -> String {
    let mut out = String::new();
    for node in graph.nodes() {
        out.push_str("node ");
        out.push_str(node.id().as_str());
        if !node.label().is_empty() {
            out.push(' ');
            out.push_str(node.label());
        }
        out.push('\n');
    }
    for edge in graph.edges() {
        out.push_str("edge ");
        out.push_str(edge.source().as_str());
        out.push_str(if edge.directed() { " -> " } else { " -- " });
        out.push_str(edge.target().as_str());
        if let Some(label) = edge.label() {
            out.push(' ');
            out.push_str(label);
        }
        out.push('\n');
    }
    out
}
