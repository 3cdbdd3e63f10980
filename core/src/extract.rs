use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::errors::ExtractionError;

lazy_static! {
    // A fence marker is ``` optionally followed by a language tag.
    static ref FENCE_MARKER: Regex =
        Regex::new(r"```[A-Za-z0-9_+-]*").expect("fence marker regex is valid");
}

/// Maximum length of the diagnostic snippet carried by an ExtractionError.
const SNIPPET_LIMIT: usize = 120;

/// Extract the first well-formed JSON object from free-form model text.
///
/// Fence markers (with or without a language tag) are replaced with the
/// empty string; the fenced content itself is kept. The substring between
/// the first `{` and the last `}` of what remains is parsed as JSON.
///
/// This is a single best-effort pass. No second extraction strategy is
/// attempted: the caller's fallback generator is the safety net for model
/// output this function cannot salvage.
pub fn extract_json_payload(raw: &str) -> Result<Value, ExtractionError> {
    let stripped = FENCE_MARKER.replace_all(raw, "");
    let trimmed = stripped.trim();

    let (start, end) = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(ExtractionError {
                snippet: truncate_snippet(trimmed),
            })
        }
    };

    let candidate = &trimmed[start..=end];
    serde_json::from_str(candidate).map_err(|_| ExtractionError {
        snippet: truncate_snippet(candidate),
    })
}

fn truncate_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_fenced_json_with_language_tag() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(extract_json_payload(raw).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn parses_fenced_json_without_language_tag() {
        let raw = "```\n{\"days\":[]}\n```";
        assert_eq!(extract_json_payload(raw).unwrap(), json!({"days": []}));
    }

    #[test]
    fn parses_bare_json() {
        assert_eq!(
            extract_json_payload("{\"b\": \"x\"}").unwrap(),
            json!({"b": "x"})
        );
    }

    #[test]
    fn extracts_outer_object_despite_surrounding_text() {
        let raw = "prefix {\"a\":{\"b\":2}} suffix";
        // `rfind('}')` lands on the outer closing brace, but the trailing
        // " suffix" has no brace, so the parsed span is the outer object.
        assert_eq!(
            extract_json_payload(raw).unwrap(),
            json!({"a": {"b": 2}})
        );
    }

    #[test]
    fn no_json_at_all_fails() {
        let err = extract_json_payload("no json here").unwrap_err();
        assert_eq!(err.snippet, "no json here");
    }

    #[test]
    fn unbalanced_braces_fail_with_snippet() {
        let err = extract_json_payload("oops {\"a\": 1").unwrap_err();
        assert!(err.snippet.contains("oops"));
    }

    #[test]
    fn unparseable_span_fails_with_candidate_snippet() {
        let err = extract_json_payload("{not valid json}").unwrap_err();
        assert_eq!(err.snippet, "{not valid json}");
    }

    #[test]
    fn snippet_is_truncated() {
        let long = format!("x{}", "y".repeat(500));
        let err = extract_json_payload(&long).unwrap_err();
        assert_eq!(err.snippet.len(), 120);
    }

    #[test]
    fn empty_input_fails() {
        assert!(extract_json_payload("").is_err());
        assert!(extract_json_payload("```json\n```").is_err());
    }
}
