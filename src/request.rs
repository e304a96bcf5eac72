//! JSON request/response contract.
//!
//! Bodies carry `plain_text` (encrypt), `cipher_text` (decrypt) and `key`.
//! Responses use one named field per algorithm and operation, or `error`
//! on failure. Routing and status codes belong to whatever transport wraps
//! this; [`CipherError::is_client_error`] tells it which side failed.

use crate::algorithm::{Algorithm, KeyKind, Operation};
use crate::ciphers::{build_cipher, playfair};
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CipherRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_text: Option<String>,
    /// String or integer; integer-keyed ciphers also take numeric strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
}

impl CipherRequest {
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(CipherError::InvalidInput("Invalid JSON data".into())),
        }
    }

    fn text(&self, operation: Operation) -> Result<&str> {
        let value = match operation {
            Operation::Encrypt => &self.plain_text,
            Operation::Decrypt => &self.cipher_text,
            Operation::CreateMatrix => return Ok(""),
        };
        value.as_deref().ok_or_else(|| {
            CipherError::MissingKey(operation.text_field().unwrap_or("text").into())
        })
    }
}

/// Response body: a single named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CipherResponse(Map<String, Value>);

impl CipherResponse {
    fn single(field: &str, value: Value) -> Self {
        let mut map = Map::new();
        map.insert(field.to_string(), value);
        Self(map)
    }

    pub fn error(err: &CipherError) -> Self {
        Self::single("error", Value::String(err.to_string()))
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_error(&self) -> bool {
        self.0.contains_key("error")
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Turn the request's key into the string form the ciphers parse
pub fn key_text(key: Option<&Value>, kind: KeyKind) -> Result<String> {
    match (key, kind) {
        (None | Some(Value::Null), _) => Err(CipherError::MissingKey("key".into())),
        (Some(Value::String(s)), _) => Ok(s.clone()),
        (Some(Value::Number(n)), KeyKind::Integer) => n
            .as_i64()
            .map(|v| v.to_string())
            .ok_or_else(|| CipherError::InvalidKey(format!("key must be an integer, got {}", n))),
        (Some(other), _) => Err(CipherError::InvalidKey(format!(
            "key must be {}, got {}",
            match kind {
                KeyKind::Integer => "an integer",
                KeyKind::Letters => "a string",
            },
            other
        ))),
    }
}

/// Run one request against one algorithm
pub fn handle(
    algorithm: Algorithm,
    operation: Operation,
    request: &CipherRequest,
) -> Result<CipherResponse> {
    let text = request.text(operation)?;
    let key = key_text(request.key.as_ref(), algorithm.key_kind())?;
    let field = algorithm.response_field(operation);
    log::debug!("handling {:?} for {}", operation, algorithm);

    let value = match operation {
        Operation::CreateMatrix => {
            if algorithm != Algorithm::Playfair {
                return Err(CipherError::InvalidInput(format!(
                    "{} has no key square",
                    algorithm
                )));
            }
            serde_json::to_value(playfair::create_matrix(&key)?)?
        }
        Operation::Encrypt => Value::String(build_cipher(algorithm, &key)?.encrypt(text)?),
        Operation::Decrypt => Value::String(build_cipher(algorithm, &key)?.decrypt(text)?),
    };
    Ok(CipherResponse::single(field, value))
}

/// Parse a JSON body, run it, and always produce a response body.
/// The error is returned alongside so the caller can classify it.
pub fn handle_json(
    algorithm: Algorithm,
    operation: Operation,
    body: &str,
) -> (CipherResponse, Option<CipherError>) {
    match CipherRequest::from_json(body).and_then(|req| handle(algorithm, operation, &req)) {
        Ok(response) => (response, None),
        Err(err) => {
            log::debug!("request failed: {}", err);
            (CipherResponse::error(&err), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CipherRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_caesar_fields_and_numeric_key() {
        let req = request(json!({"plain_text": "ABC", "key": 1}));
        let resp = handle(Algorithm::Caesar, Operation::Encrypt, &req).unwrap();
        assert_eq!(resp.get("encrypted_message"), Some(&json!("BCD")));

        let req = request(json!({"cipher_text": "BCD", "key": "1"}));
        let resp = handle(Algorithm::Caesar, Operation::Decrypt, &req).unwrap();
        assert_eq!(resp.get("decrypted_message"), Some(&json!("ABC")));
    }

    #[test]
    fn test_text_fields() {
        let req = request(json!({"plain_text": "HELLO", "key": "KEY"}));
        let resp = handle(Algorithm::Vigenere, Operation::Encrypt, &req).unwrap();
        assert_eq!(resp.get("encrypted_text"), Some(&json!("RIJVS")));
    }

    #[test]
    fn test_missing_fields() {
        let req = request(json!({"plain_text": "HELLO"}));
        let err = handle(Algorithm::Caesar, Operation::Encrypt, &req).unwrap_err();
        assert!(matches!(err, CipherError::MissingKey(ref f) if f == "key"));

        let req = request(json!({"key": 3, "plain_text": null}));
        let err = handle(Algorithm::RailFence, Operation::Encrypt, &req).unwrap_err();
        assert!(matches!(err, CipherError::MissingKey(ref f) if f == "plain_text"));

        let req = request(json!({"key": 3, "plain_text": "x"}));
        let err = handle(Algorithm::RailFence, Operation::Decrypt, &req).unwrap_err();
        assert!(matches!(err, CipherError::MissingKey(ref f) if f == "cipher_text"));
    }

    #[test]
    fn test_key_coercion() {
        assert_eq!(key_text(Some(&json!(4)), KeyKind::Integer).unwrap(), "4");
        assert_eq!(key_text(Some(&json!(" 4")), KeyKind::Integer).unwrap(), " 4");
        assert!(matches!(
            key_text(Some(&json!(2.5)), KeyKind::Integer),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            key_text(Some(&json!(7)), KeyKind::Letters),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            key_text(Some(&json!([1])), KeyKind::Integer),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            key_text(Some(&Value::Null), KeyKind::Letters),
            Err(CipherError::MissingKey(_))
        ));
    }

    #[test]
    fn test_create_matrix() {
        let req = request(json!({"key": "MONARCHY"}));
        let resp = handle(Algorithm::Playfair, Operation::CreateMatrix, &req).unwrap();
        let matrix = resp.get("playfair_matrix").unwrap();
        assert_eq!(matrix[4], json!(["U", "V", "W", "X", "Z"]));

        let err = handle(Algorithm::Caesar, Operation::CreateMatrix, &request(json!({"key": 1})))
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_handle_json_errors() {
        let (resp, err) = handle_json(Algorithm::Caesar, Operation::Encrypt, "not json");
        assert!(resp.is_error());
        assert!(err.unwrap().is_client_error());

        let (resp, err) = handle_json(Algorithm::Caesar, Operation::Encrypt, "[1, 2]");
        assert_eq!(resp.get("error"), Some(&json!("Invalid input: Invalid JSON data")));
        assert!(err.is_some());

        let (resp, err) = handle_json(
            Algorithm::Transposition,
            Operation::Encrypt,
            r#"{"plain_text": "ATTACKATDAWN", "key": "4"}"#,
        );
        assert!(err.is_none());
        assert_eq!(resp.to_json().unwrap(), r#"{"encrypted_text":"ACDTKATAWATN"}"#);
    }
}
