//! Small CLI helpers.

/// Redact a webhook URL down to scheme and host.
///
/// `https://hooks.slack.com/services/T/B/X` → `https://hooks.slack.com/…`
pub fn redact_webhook(url: &str) -> String {
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, url),
    };
    let host = rest.split('/').next().unwrap_or_default();

    match scheme {
        Some(scheme) => format!("{scheme}://{host}/…"),
        None => "…".to_string(),
    }
}
