//! Classification of REST responses into acknowledgements and errors.

use opensearch::http::response::Response;
use serde_json::Value;

use crate::errors::{AdminError, RemoteError};
use crate::types::AcknowledgedResponse;

/// Error type the cluster uses for requests that fail validation.
const VALIDATION_ERROR_TYPE: &str = "action_request_validation_exception";

/// Map a transport-level failure to an I/O error.
pub(crate) fn transport_error(err: opensearch::Error) -> AdminError {
    let cause = std::error::Error::source(&err).map(|source| source.to_string());
    AdminError::io(err.to_string(), cause)
}

/// Read an acknowledgement from a response, or classify its error body.
pub(crate) async fn acknowledged(response: Response) -> Result<AcknowledgedResponse, AdminError> {
    if !response.status_code().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<AcknowledgedResponse>()
        .await
        .map_err(|e| AdminError::io("Could not read acknowledgement", Some(e.to_string())))
}

/// Read a JSON body from a successful response, or classify its error body.
pub(crate) async fn json_body(response: Response) -> Result<Value, AdminError> {
    if !response.status_code().is_success() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AdminError::io("Could not read response body", Some(e.to_string())))
}

/// Turn a non-success response into a classified error.
pub(crate) async fn error_from_response(response: Response) -> AdminError {
    let status = response.status_code().as_u16();
    match response.text().await {
        Ok(body) => classify_error_body(status, &body),
        Err(e) => transport_error(e),
    }
}

/// Classify an error body of the form `{"error": {"type", "reason"}, "status"}`.
pub(crate) fn classify_error_body(status: u16, body: &str) -> AdminError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));

    let error_type = error
        .and_then(|e| e.get("type"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let reason = error
        .and_then(|e| e.get("reason"))
        .and_then(Value::as_str)
        .or_else(|| error.and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("request failed with status {}", status)
            } else {
                body.to_string()
            }
        });

    if error_type.as_deref() == Some(VALIDATION_ERROR_TYPE) {
        return AdminError::Validation(validation_messages(&reason));
    }

    AdminError::remote(RemoteError::new(Some(status), error_type, reason))
}

/// Split `Validation Failed: 1: first;2: second;` into its messages.
fn validation_messages(reason: &str) -> Vec<String> {
    let list = reason.strip_prefix("Validation Failed:").unwrap_or(reason);

    list.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(": ") {
            Some((number, message)) if number.chars().all(|c| c.is_ascii_digit()) => {
                message.to_string()
            }
            _ => entry.to_string(),
        })
        .collect()
}
