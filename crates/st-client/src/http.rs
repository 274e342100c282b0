use crate::{ClientError, ClientResult};

use reqwest::{RequestBuilder, Url};
use serde_json::Value;

/// Build `{base}{path}` and append percent-encoded query pairs.
pub(crate) fn build_url(base: &str, path: &str, query: &[(&str, &str)]) -> ClientResult<Url> {
    let raw = format!("{base}{path}");
    let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Execute request and turn non-2xx responses into [`ClientError::Api`].
///
/// Both error shapes used by the hosted services are understood:
/// `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}` and
/// `{"error": "Permission denied"}`.
pub(crate) async fn execute(req: RequestBuilder) -> ClientResult<Value> {
    let response = req.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_str(&text)?);
    }

    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    Err(api_error(status.as_u16(), &body, &text))
}

fn api_error(status: u16, body: &Value, raw: &str) -> ClientError {
    let (code, message) = match body.get("error") {
        Some(Value::Object(error)) => {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error")
                .to_string();
            // "WEAK_PASSWORD : Password should be at least 6 characters"
            let code = message
                .split(" : ")
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            (code, message)
        }
        Some(Value::String(message)) => (status.to_string(), message.clone()),
        _ => (status.to_string(), raw.trim().to_string()),
    };

    ClientError::api_error(status, code, message)
}
