//! Pulls the JSON document out of a model reply.

use tracing::instrument;

/// Returns the JSON payload inside a model reply.
///
/// Models asked for JSON still wrap it in Markdown fences or add a sentence
/// around it now and then. This strips a leading fence and then keeps the
/// span from the first `{` or `[` to the last matching closer. Replies
/// without either are returned trimmed so the parser reports the error.
#[instrument(skip(reply), fields(len = reply.len()))]
pub fn extract_json(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string ("json") up to the end of the fence line.
        text = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
        if let Some(end) = text.rfind("```") {
            text = &text[..end];
        }
        text = text.trim();
    }

    let Some(start) = text.find(['{', '[']) else {
        return text;
    };
    let closer = if text[start..].starts_with('{') { '}' } else { ']' };
    match text.rfind(closer) {
        Some(end) if end > start => &text[start..=end],
        _ => text,
    }
}
