use crate::core::ChartElement;

const TRUTHY_TOKENS: [&str; 3] = ["true", "yes", "on"];
const FALSY_TOKENS: [&str; 4] = ["false", "no", "off", ""];

/// Interprets a boolean attribute token, case-insensitively.
///
/// Returns `None` for anything outside the truthy/falsy vocabularies.
#[must_use]
pub fn parse_boolean_token(token: &str) -> Option<bool> {
    if TRUTHY_TOKENS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(token))
    {
        Some(true)
    } else if FALSY_TOKENS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(token))
    {
        Some(false)
    } else {
        None
    }
}

/// Reads `name` off `element` as a boolean, falling back to `default` when the
/// attribute is absent, null or unrecognized.
#[must_use]
pub fn boolean_attribute_value(element: &ChartElement, name: &str, default: bool) -> bool {
    element
        .attribute(name)
        .and_then(parse_boolean_token)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::parse_boolean_token;

    #[test]
    fn vocabularies_are_case_insensitive() {
        for token in ["TRUE", "Yes", "oN"] {
            assert_eq!(parse_boolean_token(token), Some(true), "{token}");
        }
        for token in ["False", "NO", "oFf", ""] {
            assert_eq!(parse_boolean_token(token), Some(false), "{token}");
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(parse_boolean_token(" true"), None);
        assert_eq!(parse_boolean_token("1"), None);
    }
}
