use serde::Deserialize;

/// Response envelope used by some endpoints.
///
/// ```json
/// { "status": "success", "message": "OK", "data": [ ... ] }
/// ```
///
/// Only `data` is required; `status` and `message` default to empty strings
/// when the server leaves them out.
///
/// # Example
/// ```
/// use tienda_client::common::Envelope;
///
/// let body = r#"{"status":"success","message":"OK","data":[1,2,3]}"#;
/// let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
/// assert_eq!(envelope.into_data(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: String,

    pub data: T,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Drop the wrapper and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_unwrap_envelope() {
        let envelope: Envelope<Vec<Value>> = serde_json::from_value(json!({
            "status": "success",
            "message": "OK",
            "data": [{"id": 1}, {"id": 2}]
        }))
        .unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.message, "OK");
        assert_eq!(envelope.into_data(), vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_missing_data_is_an_error() {
        let result: Result<Envelope<Vec<Value>>, _> =
            serde_json::from_value(json!({"status": "error", "message": "boom"}));
        assert!(result.is_err());
    }
}
