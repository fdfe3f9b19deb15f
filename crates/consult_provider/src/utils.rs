use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

/// Describes an outbound call for error context, e.g. `POST request to <url>`.
pub fn format_http_context(method: &str, url: &Url) -> String {
    format!("{method} request to {url}")
}

/// Copy of `headers` safe to log.
pub fn sanitize_headers(headers: &HeaderMap) -> HeaderMap {
    let sensitive_headers = [AUTHORIZATION.as_str()];
    headers
        .iter()
        .map(|(name, value)| {
            let name_str = name.as_str().to_lowercase();
            let value_str = if sensitive_headers.contains(&name_str.as_str()) {
                HeaderValue::from_static("[REDACTED]")
            } else {
                value.clone()
            };
            (name.clone(), value_str)
        })
        .collect()
}
