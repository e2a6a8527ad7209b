// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-flow graph to IVR tree mapping.
//!
//! A single walk over the node list: each node's kind is mapped through a
//! fixed type table, menu digits and conditional branches are resolved
//! against the edge list by matching `condition` values, and everything else
//! follows its first unconditioned outgoing edge.

use voxline_core::VoxlineError;
use voxline_core::types::{FlowConfig, FlowNode};

use crate::types::{IvrBranches, IvrNode, IvrOption, IvrTree};

/// Builds the provider IVR tree for a flow graph.
///
/// The entry node is the first node of kind `start` or `greeting`, else the
/// first node in the list. An empty graph is rejected outright.
pub fn build_ivr_tree(name: &str, flow: &FlowConfig) -> Result<IvrTree, VoxlineError> {
    let entry = entry_node(flow)?;
    let nodes = flow.nodes.iter().map(|node| map_node(node, flow)).collect();
    Ok(IvrTree {
        name: name.to_string(),
        entry: entry.id.clone(),
        nodes,
    })
}

fn entry_node(flow: &FlowConfig) -> Result<&FlowNode, VoxlineError> {
    if flow.nodes.is_empty() {
        return Err(VoxlineError::Flow(
            "flow graph has no nodes, cannot pick an entry node".into(),
        ));
    }
    Ok(flow
        .nodes
        .iter()
        .find(|n| n.kind == "start" || n.kind == "greeting")
        .unwrap_or(&flow.nodes[0]))
}

/// Maps a local node kind to the provider's IVR node type.
fn ivr_node_type(kind: &str) -> &'static str {
    match kind {
        "start" | "greeting" | "message" | "prompt" => "prompt",
        "menu" => "menu",
        "condition" => "condition",
        "transfer" => "transfer",
        "hangup" => "hangup",
        _ => "prompt",
    }
}

fn map_node(node: &FlowNode, flow: &FlowConfig) -> IvrNode {
    let node_type = ivr_node_type(&node.kind);
    let prompt = node
        .data
        .get("prompt")
        .or_else(|| node.data.get("text"))
        .and_then(|v| v.as_str())
        .map(String::from);

    let mut options = None;
    let mut branches = None;
    let mut next = None;

    match node_type {
        "menu" => {
            options = menu_options(node, flow);
            if options.is_none() {
                next = edge_target(flow, &node.id, None);
            }
        }
        "condition" => {
            // Unmatched branches resolve to empty targets, same as menu digits.
            branches = Some(IvrBranches {
                on_true: edge_target(flow, &node.id, Some("true")).unwrap_or_default(),
                on_false: edge_target(flow, &node.id, Some("false")).unwrap_or_default(),
            });
        }
        _ => {
            next = edge_target(flow, &node.id, None);
        }
    }

    IvrNode {
        id: node.id.clone(),
        node_type: node_type.to_string(),
        prompt,
        options,
        branches,
        next,
    }
}

/// Resolves a node's menu options against the edge list.
///
/// A digit with no matching edge maps to an empty target. The published tree
/// then dead-ends on that option; kept as-is until the provider's handling
/// of empty targets is confirmed.
fn menu_options(node: &FlowNode, flow: &FlowConfig) -> Option<Vec<IvrOption>> {
    let raw = node.data.get("options")?.as_array()?;
    Some(
        raw.iter()
            .filter_map(|option| option.get("digit").and_then(|d| d.as_str()))
            .map(|digit| IvrOption {
                digit: digit.to_string(),
                next: edge_target(flow, &node.id, Some(digit)).unwrap_or_default(),
            })
            .collect(),
    )
}

fn edge_target(flow: &FlowConfig, source: &str, condition: Option<&str>) -> Option<String> {
    flow.edges
        .iter()
        .find(|e| e.source == source && e.condition.as_deref() == condition)
        .map(|e| e.target.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use voxline_core::types::FlowEdge;

    fn node(id: &str, kind: &str, data: serde_json::Value) -> FlowNode {
        FlowNode {
            id: id.into(),
            kind: kind.into(),
            data,
        }
    }

    fn edge(source: &str, target: &str, condition: Option<&str>) -> FlowEdge {
        FlowEdge {
            source: source.into(),
            target: target.into(),
            condition: condition.map(String::from),
        }
    }

    #[test]
    fn greeting_menu_graph_maps_entry_and_digit() {
        let flow = FlowConfig {
            nodes: vec![
                node("a", "greeting", json!({"text": "Welcome"})),
                node("b", "menu", json!({"options": [{"digit": "1"}]})),
            ],
            edges: vec![edge("a", "b", None), edge("b", "a", Some("1"))],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        assert_eq!(tree.entry, "a");

        let menu = tree.nodes.iter().find(|n| n.id == "b").unwrap();
        let options = menu.options.as_ref().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].digit, "1");
        assert_eq!(options[0].next, "a");

        let greeting = tree.nodes.iter().find(|n| n.id == "a").unwrap();
        assert_eq!(greeting.node_type, "prompt");
        assert_eq!(greeting.prompt.as_deref(), Some("Welcome"));
        assert_eq!(greeting.next.as_deref(), Some("b"));
    }

    #[test]
    fn unmatched_menu_digit_maps_to_empty_target() {
        let flow = FlowConfig {
            nodes: vec![node(
                "m",
                "menu",
                json!({"options": [{"digit": "1"}, {"digit": "2"}]}),
            )],
            edges: vec![edge("m", "x", Some("1"))],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        let options = tree.nodes[0].options.as_ref().unwrap();
        assert_eq!(options[0].next, "x");
        // Documented behavior: the digit without an edge publishes with an
        // empty target rather than an error.
        assert_eq!(options[1].next, "");
    }

    #[test]
    fn condition_node_resolves_boolean_branches() {
        let flow = FlowConfig {
            nodes: vec![node("c", "condition", json!({}))],
            edges: vec![edge("c", "yes", Some("true")), edge("c", "no", Some("false"))],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        let branches = tree.nodes[0].branches.as_ref().unwrap();
        assert_eq!(branches.on_true, "yes");
        assert_eq!(branches.on_false, "no");
    }

    #[test]
    fn entry_falls_back_to_first_node() {
        let flow = FlowConfig {
            nodes: vec![
                node("n1", "transfer", json!({})),
                node("n2", "hangup", json!({})),
            ],
            edges: vec![],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        assert_eq!(tree.entry, "n1");
    }

    #[test]
    fn unrecognized_kind_defaults_to_prompt() {
        let flow = FlowConfig {
            nodes: vec![node("z", "webhook", json!({}))],
            edges: vec![],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        assert_eq!(tree.nodes[0].node_type, "prompt");
    }

    #[test]
    fn empty_graph_is_rejected() {
        let err = build_ivr_tree("main", &FlowConfig::default())
            .expect_err("empty graph should fail");
        assert!(matches!(err, VoxlineError::Flow(_)));
    }

    #[test]
    fn menu_without_options_follows_unconditioned_edge() {
        let flow = FlowConfig {
            nodes: vec![node("m", "menu", json!({}))],
            edges: vec![edge("m", "out", None)],
        };

        let tree = build_ivr_tree("main", &flow).unwrap();
        assert!(tree.nodes[0].options.is_none());
        assert_eq!(tree.nodes[0].next.as_deref(), Some("out"));
    }
}
