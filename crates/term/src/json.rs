//! JSON rendering for scripted sessions.
//!
//! One object per line: `{"type":"snapshot",...}` and `{"type":"result",...}`.

use anyhow::Result;
use serde_json::json;
pub use serde_json::Value;

use crate::core::{ActionError, GameSnapshot, Outcome};
use crate::types::{GameAction, Piece};

pub fn snapshot_value(snap: &GameSnapshot) -> Result<Value> {
    let mut v = serde_json::to_value(snap)?;
    if let Value::Object(map) = &mut v {
        map.insert("type".to_string(), json!("snapshot"));
    }
    Ok(v)
}

pub fn outcome_value(action: GameAction, result: &Result<Outcome, ActionError>) -> Result<Value> {
    let v = match result {
        Ok(outcome) => {
            let (kind, pieces) = match outcome {
                Outcome::Played(p) => ("played", piece_list(p)?),
                Outcome::Reserved(p) => ("reserved", piece_list(p)?),
                Outcome::UsedReserved(p) => ("used_reserved", piece_list(p)?),
                Outcome::Inserted(p) => ("inserted", piece_list(p)?),
                Outcome::Swapped(report) => {
                    let to_queue = serde_json::to_value(report.to_queue.as_slice())?;
                    let to_reserve = serde_json::to_value(report.to_reserve.as_slice())?;
                    (
                        "swapped",
                        json!({ "to_queue": to_queue, "to_reserve": to_reserve }),
                    )
                }
                Outcome::Viewed => ("viewed", Value::Null),
            };
            json!({
                "type": "result",
                "action": action.as_str(),
                "ok": true,
                "outcome": kind,
                "pieces": pieces,
            })
        }
        Err(err) => json!({
            "type": "result",
            "action": action.as_str(),
            "ok": false,
            "error": err.code(),
            "message": err.to_string(),
        }),
    };
    Ok(v)
}

pub fn invalid_value(input: &str) -> Value {
    json!({ "type": "invalid", "input": input.trim() })
}

fn piece_list(piece: &Piece) -> Result<Value> {
    Ok(Value::Array(vec![serde_json::to_value(piece)?]))
}

/// Serialize to a single line (no trailing newline).
pub fn to_line(v: &Value) -> Result<String> {
    Ok(serde_json::to_string(v)?)
}
