//! GET + `{ok, result}` envelope handling for the Telegram Bot API.

use serde::Deserialize;
use serde_json::Value;

use dicebot_core::{errors::Error, Result};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    description: Option<String>,
}

/// Turn an HTTP status + body into the envelope's `result` payload.
///
/// - any status but 200: no usable payload
/// - `ok` false or absent: the service is treated as down
/// - `ok` true without `result`: missing field
pub fn unwrap_envelope(method: &str, status: u16, body: &[u8]) -> Result<Value> {
    if status != 200 {
        return Err(Error::NoPayload {
            method: method.to_string(),
            status,
        });
    }

    let envelope: Envelope = serde_json::from_slice(body)?;
    if !envelope.ok {
        return Err(Error::ServiceUnavailable {
            method: method.to_string(),
            description: envelope
                .description
                .unwrap_or_else(|| "ok=false".to_string()),
        });
    }

    envelope.result.ok_or(Error::MissingField("result"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_true_returns_result_payload() {
        let v = unwrap_envelope("getMe", 200, br#"{"ok":true,"result":{"id":1}}"#).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1}));

        let v = unwrap_envelope("getUpdates", 200, br#"{"ok":true,"result":[]}"#).unwrap();
        assert_eq!(v, serde_json::json!([]));
    }

    #[test]
    fn ok_false_is_service_unavailable_without_payload() {
        let err = unwrap_envelope("getUpdates", 200, br#"{"ok":false}"#).unwrap_err();
        match err {
            Error::ServiceUnavailable {
                method,
                description,
            } => {
                assert_eq!(method, "getUpdates");
                assert_eq!(description, "ok=false");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_ok_flag_counts_as_down() {
        let err = unwrap_envelope("getMe", 200, br#"{"result":{"id":1}}"#).unwrap_err();
        assert!(matches!(err, Error::ServiceUnavailable { .. }));
    }

    #[test]
    fn description_is_carried_when_present() {
        let err = unwrap_envelope(
            "sendDice",
            200,
            br#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("chat not found"));
    }

    #[test]
    fn non_success_status_has_no_payload() {
        let err = unwrap_envelope(
            "getMe",
            401,
            br#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoPayload { status: 401, .. }));
    }

    #[test]
    fn other_2xx_statuses_have_no_payload() {
        for status in [201, 204] {
            let err = unwrap_envelope("getMe", status, br#"{"ok":true,"result":{"id":1}}"#)
                .unwrap_err();
            assert!(matches!(err, Error::NoPayload { .. }), "{status}");
        }
    }

    #[test]
    fn ok_without_result_is_missing_field() {
        let err = unwrap_envelope("getMe", 200, br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, Error::MissingField("result")));
    }

    #[test]
    fn non_json_body_is_json_error() {
        let err = unwrap_envelope("getMe", 200, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
