use crate::algorithm::{Algorithm, Operation};
use crate::error::{CipherError, Result};
use crate::request::handle_json;
use std::io::Read;
use std::path::Path;

/// Outcome of a JSON request: the response body, plus the error when
/// the request failed
#[derive(Debug)]
pub struct RequestOutcome {
    pub body: String,
    pub error: Option<CipherError>,
}

/// Run a JSON request body read from a file, or stdin when no path is given
pub fn run_request(
    algorithm: Algorithm,
    operation: Operation,
    path: Option<&Path>,
) -> Result<RequestOutcome> {
    let body = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    run_request_body(algorithm, operation, &body)
}

pub fn run_request_body(
    algorithm: Algorithm,
    operation: Operation,
    body: &str,
) -> Result<RequestOutcome> {
    let (response, error) = handle_json(algorithm, operation, body);
    Ok(RequestOutcome {
        body: response.to_json()?,
        error,
    })
}
