// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Undine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Undine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;
use smallvec::smallvec;

use super::{parse_diagram, parse_diagram_with, GlyphSet, ParseDiagramError, ParseOptions};
use crate::model::Graph;

type NodeView = Vec<(String, String)>;
type EdgeView = Vec<(String, String, bool, Option<String>)>;

fn view(graph: &Graph) -> (NodeView, EdgeView) {
    let nodes = graph
        .nodes()
        .iter()
        .map(|node| (node.id().to_string(), node.label().to_owned()))
        .collect();
    let edges = graph
        .edges()
        .iter()
        .map(|edge| {
            (
                edge.source().to_string(),
                edge.target().to_string(),
                edge.directed(),
                edge.label().map(str::to_owned),
            )
        })
        .collect();
    (nodes, edges)
}

#[test]
fn two_boxes_and_a_plain_run_make_one_undirected_edge() {
    let art = "+---+     +---+\n| A |-----| B |\n+---+     +---+\n";
    let graph = parse_diagram(art).expect("parse");
    let (nodes, edges) = view(&graph);

    assert_eq!(
        nodes,
        vec![
            ("n:0001".to_owned(), "A".to_owned()),
            ("n:0002".to_owned(), "B".to_owned())
        ]
    );
    assert_eq!(
        edges,
        vec![("n:0001".to_owned(), "n:0002".to_owned(), false, None)]
    );
}

#[test]
fn an_arrowhead_at_one_side_makes_the_edge_directed() {
    let art = "+---+     +---+\n| A |---->| B |\n+---+     +---+\n";
    let graph = parse_diagram(art).expect("parse");
    let (_, edges) = view(&graph);
    assert_eq!(
        edges,
        vec![("n:0001".to_owned(), "n:0002".to_owned(), true, None)]
    );
}

#[test]
fn an_upward_arrow_directs_toward_the_upper_box() {
    let art = "+---+\n| A |\n+---+\n  ^\n  |\n+---+\n| B |\n+---+\n";
    let graph = parse_diagram(art).expect("parse");
    let (_, edges) = view(&graph);
    assert_eq!(
        edges,
        vec![("n:0002".to_owned(), "n:0001".to_owned(), true, None)]
    );
}

#[test]
fn midpoint_text_is_carried_as_the_edge_label() {
    let art = concat!(
        "+---+           +---+\n",
        "| A |-----------| B |\n",
        "+---+   flows   +---+\n",
    );
    let graph = parse_diagram(art).expect("parse");
    let (_, edges) = view(&graph);
    assert_eq!(
        edges,
        vec![(
            "n:0001".to_owned(),
            "n:0002".to_owned(),
            false,
            Some("flows".to_owned())
        )]
    );
}

#[test]
fn a_connector_touching_no_box_produces_nothing() {
    let art = "----->\n\n  |\n  |\n";
    let graph = parse_diagram(art).expect("parse");
    assert!(graph.nodes().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn parallel_runs_stay_two_distinct_edges() {
    let art = concat!(
        "+---+     +---+\n",
        "|   |-----|   |\n",
        "| A |     | B |\n",
        "|   |-----|   |\n",
        "+---+     +---+\n",
    );
    let graph = parse_diagram(art).expect("parse");
    let (nodes, edges) = view(&graph);
    assert_eq!(nodes.len(), 2);
    assert_eq!(
        edges,
        vec![
            ("n:0001".to_owned(), "n:0002".to_owned(), false, None),
            ("n:0001".to_owned(), "n:0002".to_owned(), false, None)
        ]
    );
}

#[test]
fn empty_input_yields_an_empty_graph() {
    let graph = parse_diagram("").expect("parse");
    assert!(graph.is_empty());

    let blank = parse_diagram("   \n\t\n").expect("parse");
    assert!(blank.is_empty());
}

#[rstest]
#[case('-')]
#[case('=')]
fn both_horizontal_strokes_connect(#[case] stroke: char) {
    let run = stroke.to_string().repeat(5);
    let art = format!("+---+     +---+\n| A |{run}| B |\n+---+     +---+\n");
    let graph = parse_diagram(&art).expect("parse");
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].length(), 5);
}

#[rstest]
#[case("---->", true)]
#[case("<----", true)]
#[case("<--->", false)]
#[case("-----", false)]
fn arrowhead_combinations_follow_the_direction_policy(
    #[case] run: &str,
    #[case] directed: bool,
) {
    let art = format!("+---+     +---+\n| A |{run}| B |\n+---+     +---+\n");
    let graph = parse_diagram(&art).expect("parse");
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].directed(), directed);
}

#[test]
fn junctions_fan_one_path_out_to_every_pair() {
    let art = concat!(
        "+---+     +---+\n",
        "| A |--+--| B |\n",
        "+---+  |  +---+\n",
        "       |\n",
        "     +---+\n",
        "     | C |\n",
        "     +---+\n",
    );
    let graph = parse_diagram(art).expect("parse");
    let (nodes, edges) = view(&graph);
    assert_eq!(nodes.len(), 3);
    let mut pairs = edges
        .iter()
        .map(|(source, target, ..)| (source.clone(), target.clone()))
        .collect::<Vec<_>>();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("n:0001".to_owned(), "n:0002".to_owned()),
            ("n:0001".to_owned(), "n:0003".to_owned()),
            ("n:0002".to_owned(), "n:0003".to_owned())
        ]
    );
}

#[test]
fn node_discovery_order_is_reading_order_of_top_left_corners() {
    let art = concat!(
        "        +---+\n",
        "+---+   | B |\n",
        "| C |   +---+\n",
        "+---+\n",
        "          +---+\n",
        "          | D |\n",
        "          +---+\n",
    );
    let graph = parse_diagram(art).expect("parse");
    let labels = graph
        .nodes()
        .iter()
        .map(|node| node.label().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["B", "C", "D"]);

    let positions = graph
        .nodes()
        .iter()
        .map(|node| node.position())
        .collect::<Vec<_>>();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn every_edge_endpoint_refers_to_a_known_node() {
    let art = concat!(
        "+-----+    +-----+     +-----+\n",
        "| in  |--->| mid |---->| out |\n",
        "+-----+    +-----+     +-----+\n",
        "   |           |\n",
        "   |           v\n",
        "   |        +-----+\n",
        "   +------->| log |\n",
        "            +-----+\n",
    );
    let graph = parse_diagram(art).expect("parse");
    for edge in graph.edges() {
        assert!(graph.node(edge.source()).is_some());
        assert!(graph.node(edge.target()).is_some());
    }
}

#[test]
fn parsing_is_deterministic_and_idempotent() {
    let art = concat!(
        "+---+     +---+\n",
        "| A |--+--| B |\n",
        "+---+  |  +---+\n",
        "       |\n",
        "     +---+\n",
        "     | C |\n",
        "     +---+\n",
    );
    let first = parse_diagram(art).expect("parse");
    let second = parse_diagram(art).expect("parse");
    assert_eq!(first, second);
}

#[test]
fn labels_may_repeat_across_distinct_nodes() {
    let art = "+---+     +---+\n| A |-----| A |\n+---+     +---+\n";
    let graph = parse_diagram(art).expect("parse");
    let (nodes, edges) = view(&graph);
    assert_eq!(
        nodes,
        vec![
            ("n:0001".to_owned(), "A".to_owned()),
            ("n:0002".to_owned(), "A".to_owned())
        ]
    );
    assert_eq!(edges.len(), 1);
}

#[test]
fn connector_glyphs_inside_a_label_stay_text() {
    let art = "+-----+     +-----+\n| C++ |-----| <=> |\n+-----+     +-----+\n";
    let graph = parse_diagram(art).expect("parse");
    let (nodes, edges) = view(&graph);
    assert_eq!(
        nodes,
        vec![
            ("n:0001".to_owned(), "C++".to_owned()),
            ("n:0002".to_owned(), "<=>".to_owned())
        ]
    );
    assert_eq!(edges.len(), 1);
}

#[test]
fn an_unclosed_border_degrades_into_connector_material() {
    // The right shape never closes; its glyphs act as a stroke into A.
    let art = "+---+\n| A |----+\n+---+    |\n";
    let graph = parse_diagram(art).expect("parse");
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());
}

#[test]
fn a_custom_dialect_is_honored_per_call() {
    let art = "*---*   *---*\n| A |---| B |\n*---*   *---*\n";
    let plain = parse_diagram(art).expect("parse");
    assert!(plain.nodes().is_empty());

    let options = ParseOptions {
        glyphs: GlyphSet {
            corner: smallvec!['*'],
            ..GlyphSet::default()
        },
        ..ParseOptions::default()
    };
    let graph = parse_diagram_with(art, &options).expect("parse");
    let (nodes, edges) = view(&graph);
    assert_eq!(nodes.len(), 2);
    assert_eq!(edges.len(), 1);
}

#[test]
fn oversized_input_is_the_one_hard_failure() {
    let art = "+---+     +---+\n| A |-----| B |\n+---+     +---+\n";
    let options = ParseOptions {
        max_cells: Some(8),
        ..ParseOptions::default()
    };
    let err = parse_diagram_with(art, &options).expect_err("oversized");
    assert_eq!(
        err,
        ParseDiagramError::OversizedInput {
            cells: 45,
            max_cells: 8
        }
    );
    assert!(err.to_string().contains("45"));

    let generous = ParseOptions {
        max_cells: Some(45),
        ..ParseOptions::default()
    };
    assert!(parse_diagram_with(art, &generous).is_ok());
}

#[test]
fn nested_boxes_never_become_nodes() {
    let art = "+-------+\n| +---+ |\n| | X | |\n| +---+ |\n+-------+\n";
    let graph = parse_diagram(art).expect("parse");
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());
}
