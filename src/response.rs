//! Standard response envelope: `{"status": "OK" | "ERROR", "data": ...}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "ERROR";

#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope {
            status: STATUS_OK.to_string(),
            data,
        }
    }
}

impl Envelope<String> {
    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            status: STATUS_ERROR.to_string(),
            data: message.into(),
        }
    }
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::ok(data)))
}

/// Acknowledgement for writes that return no payload.
pub fn success_ack() -> (StatusCode, Json<Envelope<&'static str>>) {
    success("success")
}
