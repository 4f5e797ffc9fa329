//! Helpers for inspecting handler responses.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;

/// Reads the full response body as bytes.
pub async fn body_bytes(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

/// Reads and deserializes a JSON response body.
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = body_bytes(resp).await;

    serde_json::from_slice(&bytes).expect("response body is not the expected JSON")
}

/// Reads a plain text response body.
pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("response body is not UTF-8")
}
