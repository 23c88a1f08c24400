// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::regions::NodeRegion;
use super::resolve::CandidateEdge;
use crate::model::{Graph, GraphEdge, GraphNode, NodeId};

fn node_id_from_index(index: usize) -> NodeId {
    NodeId::new(format!("n:{:04}", index + 1)).expect("valid node id")
}

/// Assigns stable node ids in discovery order and re-labels candidate edges
/// onto them.
///
/// Deduplication is per traced path only: the same pair/direction/label from
/// the same path collapses to one edge, while distinct parallel connectors
/// between the same nodes always stay distinct. No further inference happens
/// here.
pub(crate) fn assemble(regions: &[NodeRegion], candidates: Vec<CandidateEdge>) -> Graph {
    let mut graph = Graph::default();

    let ids = (0..regions.len()).map(node_id_from_index).collect::<Vec<_>>();
    for (region, id) in regions.iter().zip(&ids) {
        let corner = region.top_left();
        graph.push_node(GraphNode::new(id.clone(), region.label(), (corner.row, corner.col)));
    }

    let mut seen = HashSet::<(usize, usize, usize, bool, Option<String>)>::new();
    for candidate in candidates {
        let key = (
            candidate.path,
            candidate.source,
            candidate.target,
            candidate.directed,
            candidate.label.clone(),
        );
        if !seen.insert(key) {
            continue;
        }
        graph.push_edge(GraphEdge::new(
            ids[candidate.source].clone(),
            ids[candidate.target].clone(),
            candidate.directed,
            candidate.label,
            candidate.length,
        ));
    }

    graph
}
