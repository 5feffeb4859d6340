//! Payload extraction from raw model text.

/// Extract the JSON payload from raw backend text.
///
/// Models routinely wrap their JSON in explanatory prose and markdown code
/// fences. If the text contains a triple-backtick fence (optionally tagged
/// `json`), only the fence interior is returned; otherwise the whole text is
/// returned trimmed.
pub fn extract_payload(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    let mut body = &trimmed[open + 3..];
    if let Some(tagged) = body.strip_prefix("json") {
        body = tagged;
    }
    let interior = match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    };
    interior.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_is_trimmed() {
        assert_eq!(extract_payload("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_tagged_fence_interior() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(extract_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_untagged_fence_interior() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_fence_with_surrounding_prose() {
        let raw = "Here is the plan you asked for:\n```json\n{\"a\": 1}\n```\nLet me know!";
        assert_eq!(extract_payload(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_unclosed_fence_takes_rest() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(extract_payload(raw), "{\"a\": 1}");
    }
}
