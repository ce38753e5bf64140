//! Handler for the parse endpoint.
//!
//! Coerces the inbound id, invokes the external parser through the adapter,
//! and either forwards its stdout as the response body or wraps an
//! `Error`-prefixed output in a structured failure document.

use axum::{
    extract::{Path, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::parser::ParseOutcome;
use crate::state::AppState;

/// Parses the log identified by the path id and relays the result.
///
/// The response is always 200 once the parser produced stdout: successful
/// output is forwarded byte-for-byte as the JSON body, and `Error`-prefixed
/// output becomes a structured failure payload with the raw text embedded
/// verbatim. Existing callers depend on the 200 status in both cases.
pub async fn parse(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = coerce_id(&raw_id);
    let output = state.parser.parse_log(id).await?;

    match ParseOutcome::classify(output) {
        ParseOutcome::Parsed(body) => {
            // Passthrough: the parser already serialized the document.
            Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
        }
        ParseOutcome::Failed(raw) => {
            tracing::warn!(id, detail = %raw.trim(), "Parser reported failure");
            Ok(Json(json!({
                "error": "Can't parse file",
                "log": [{
                    "name": "Error - can't parse file",
                    "v": { "error": raw },
                }],
            }))
            .into_response())
        }
    }
}

/// Coerce a path parameter to an integer id.
///
/// Mirrors loose string-to-int coercion: optional leading whitespace and
/// sign, then the longest leading run of ASCII digits. Anything non-numeric
/// coerces to 0.
fn coerce_id(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return 0;
    }

    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };

    signed.parse::<i64>().unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use super::coerce_id;

    #[test]
    fn numeric_ids_pass_through() {
        assert_eq!(coerce_id("0"), 0);
        assert_eq!(coerce_id("42"), 42);
        assert_eq!(coerce_id("007"), 7);
    }

    #[test]
    fn non_numeric_coerces_to_zero() {
        assert_eq!(coerce_id("abc"), 0);
        assert_eq!(coerce_id(""), 0);
        assert_eq!(coerce_id("-"), 0);
        assert_eq!(coerce_id("x9"), 0);
    }

    #[test]
    fn leading_digits_are_taken() {
        assert_eq!(coerce_id("12abc"), 12);
        assert_eq!(coerce_id("  8"), 8);
        assert_eq!(coerce_id("+15"), 15);
        assert_eq!(coerce_id("-3rd"), -3);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(coerce_id("99999999999999999999"), i64::MAX);
        assert_eq!(coerce_id("-99999999999999999999"), i64::MIN);
    }
}
