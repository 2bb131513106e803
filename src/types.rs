//! Core types for the todo server.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single todo entry.
///
/// Serialized with camelCase keys, matching the wire and on-disk format:
/// `{id, text, completed, createdAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Epoch-millisecond-derived identifier, unique within the collection.
    pub id: i64,
    /// Display text, trimmed at creation.
    pub text: String,
    pub completed: bool,
    /// ISO-8601 UTC creation time, immutable after creation.
    pub created_at: String,
}

/// Request body for `POST /api/todos`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub text: Option<String>,
}

/// Request body for `PUT /api/todos/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Get the current timestamp in milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Get the current UTC time as an ISO-8601 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Allocate an identifier for a new todo.
///
/// Identifiers are epoch-millisecond clock readings. Two creations within the
/// same clock tick would collide, so the new id is bumped past the current
/// maximum whenever the clock reading does not exceed it. Ids stay unique and
/// monotonically increasing without changing their observable format.
pub fn next_id(todos: &[Todo], now: i64) -> i64 {
    match todos.iter().map(|t| t.id).max() {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}
