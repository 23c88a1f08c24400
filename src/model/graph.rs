// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;

/// The neutral recognition output: ordered nodes plus ordered edges.
///
/// Node order is discovery order (top-to-bottom, then left-to-right by the
/// region's top-left corner); edge order follows connector trace order.
/// Every edge endpoint refers to a node in `nodes`. Values are never mutated
/// after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub(crate) fn push_node(&mut self, node: GraphNode) {
        self.nodes.push(node);
    }

    pub(crate) fn push_edge(&mut self, edge: GraphEdge) {
        debug_assert!(self.node(edge.source()).is_some());
        debug_assert!(self.node(edge.target()).is_some());
        self.edges.push(edge);
    }
}

/// One recognized node: stable id, extracted label text, and the grid
/// `(row, col)` of its region's top-left corner.
///
/// Labels are opaque text and need not be unique; identity is the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    id: NodeId,
    label: String,
    position: (usize, usize),
}

impl GraphNode {
    pub fn new(id: NodeId, label: impl Into<String>, position: (usize, usize)) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> (usize, usize) {
        self.position
    }
}

/// One recognized edge.
///
/// `length` is the number of connector cells in the traced stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    source: NodeId,
    target: NodeId,
    directed: bool,
    label: Option<String>,
    length: usize,
}

impl GraphEdge {
    pub fn new(
        source: NodeId,
        target: NodeId,
        directed: bool,
        label: Option<String>,
        length: usize,
    ) -> Self {
        Self {
            source,
            target,
            directed,
            label,
            length,
        }
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
