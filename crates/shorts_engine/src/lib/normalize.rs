//! # Completion Cleanup
//!
//! Hosted models do not reliably honor "output only X" instructions, so
//! every completion passes through a best-effort regex cleanup before it is
//! returned or stored. The patterns are deliberately permissive: leaving
//! boilerplate in is acceptable, stripping real content is not.

use std::sync::LazyLock;

use regex::Regex;

/// How aggressively to clean a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Single-value outputs (essence, quote, image prompt): strip prefixes,
    /// trailing explanations, citation markers, and one layer of quotes.
    Strict,
    /// Multi-line summaries: strip only leading boilerplate and citation
    /// markers, preserving list formatting.
    Summary,
}

static STRICT_PREFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^Here is.*?:\s*",
        r"(?i)^Based on.*?:\s*",
        r"(?i)^Sure.*?:\s*",
        r"(?i)^The quote is.*?:\s*",
        r"(?i)^The essence is.*?:\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static SUMMARY_PREFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)^Here is.*?:\s*", r"(?i)^Based on.*?:\s*"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static SUFFIX_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)\s*This quote captures.*$",
        r"(?is)\s*This reflects.*$",
        r"(?is)\s*In this passage.*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// Strips conversational boilerplate from a model completion.
///
/// Total over all inputs: empty input yields an empty string, and no input
/// can fail.
pub fn normalize(text: &str, mode: NormalizeMode) -> String {
    if text.is_empty() {
        return String::new();
    }

    match mode {
        NormalizeMode::Strict => {
            let cleaned = strip_patterns(text, &STRICT_PREFIX_RES);
            let cleaned = strip_patterns(&cleaned, &SUFFIX_RES);
            let cleaned = CITATION_RE.replace_all(&cleaned, "");
            strip_enclosing_quotes(cleaned.trim()).trim().to_string()
        }
        NormalizeMode::Summary => {
            let cleaned = strip_patterns(text, &SUMMARY_PREFIX_RES);
            let cleaned = CITATION_RE.replace_all(&cleaned, "");
            cleaned.trim().to_string()
        }
    }
}

/// Applies each pattern once, in order, to the running result.
fn strip_patterns(text: &str, patterns: &[Regex]) -> String {
    let mut out = text.to_string();
    for re in patterns {
        out = re.replace(&out, "").into_owned();
    }
    out
}

/// Removes one layer of straight quotation marks, each side independently.
fn strip_enclosing_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
