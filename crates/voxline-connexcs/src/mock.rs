// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned responses served in mock mode.
//!
//! Lets the rest of the application exercise its UI and workflows without
//! live portal credentials. Responses are structurally valid but randomly
//! valued; this is not a faithful simulation of provider semantics.

use chrono::{Duration, Utc};
use rand::Rng;
use reqwest::Method;
use serde_json::{Value, json};

use crate::endpoint::Endpoint;

/// Returns the canned response for an endpoint/method pair.
pub(crate) fn respond(endpoint: &Endpoint, method: &Method) -> Value {
    let mut rng = rand::thread_rng();
    let is_get = *method == Method::GET;
    match endpoint {
        Endpoint::Agents if is_get => json!({ "agents": [] }),
        Endpoint::KnowledgeStores if is_get => json!({ "stores": [] }),
        Endpoint::AgentStats(_) => synthetic_stats(&mut rng),
        Endpoint::AgentCalls(_) => synthetic_calls(&mut rng),
        Endpoint::Agents
        | Endpoint::Agent(_)
        | Endpoint::Ivr
        | Endpoint::KnowledgeStores
        | Endpoint::KnowledgeStore(_)
        | Endpoint::KnowledgeEntries(_) => created(&mut rng),
        _ => json!({ "success": true, "mock_mode": true }),
    }
}

/// Mutating calls get a fresh synthetic id plus a success flag.
fn created(rng: &mut impl Rng) -> Value {
    json!({ "id": rng.gen_range(1_000u64..1_000_000), "success": true })
}

fn synthetic_stats(rng: &mut impl Rng) -> Value {
    let total_calls: u64 = rng.gen_range(0..1000);
    json!({
        "total_calls": total_calls,
        "total_duration": total_calls * rng.gen_range(30..180),
        "average_duration": rng.gen_range(30..180),
        "success_rate": rng.gen_range(85.0..95.0),
    })
}

fn synthetic_calls(rng: &mut impl Rng) -> Value {
    let calls: Vec<Value> = (0..3)
        .map(|i| {
            let started = Utc::now() - Duration::minutes(rng.gen_range(5..1440));
            let status = ["answered", "no_answer", "busy"][rng.gen_range(0..3)];
            json!({
                "id": format!("mock-call-{}", rng.gen_range(10_000u64..100_000)),
                "from": format!("+1555010{i:04}"),
                "to": format!("+1555019{i:04}"),
                "duration": rng.gen_range(10u64..600),
                "status": status,
                "started_at": started.to_rfc3339(),
            })
        })
        .collect();
    json!({ "calls": calls })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgentStatsWire, CallsResponse, CreatedResource};

    #[test]
    fn mutating_calls_get_synthetic_id() {
        let value = respond(&Endpoint::Agents, &Method::POST);
        let created: CreatedResource =
            serde_json::from_value(value).expect("mock create should parse");
        assert!(created.id >= 1_000);
    }

    #[test]
    fn collection_gets_are_empty() {
        let value = respond(&Endpoint::Agents, &Method::GET);
        assert_eq!(value["agents"], json!([]));
    }

    #[test]
    fn stats_stay_inside_documented_ranges() {
        for _ in 0..50 {
            let value = respond(&Endpoint::AgentStats(1), &Method::GET);
            let stats: AgentStatsWire =
                serde_json::from_value(value).expect("mock stats should parse");
            assert!(stats.total_calls < 1000);
            assert!((85.0..95.0).contains(&stats.success_rate));
        }
    }

    #[test]
    fn call_logs_parse_into_wire_shape() {
        let value = respond(&Endpoint::AgentCalls(1), &Method::GET);
        let calls: CallsResponse =
            serde_json::from_value(value).expect("mock calls should parse");
        assert_eq!(calls.calls.len(), 3);
        assert!(!calls.calls[0].from_number.is_empty());
    }

    #[test]
    fn unmatched_endpoint_gets_generic_ack() {
        let value = respond(&Endpoint::Login, &Method::POST);
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["mock_mode"], json!(true));
    }
}
