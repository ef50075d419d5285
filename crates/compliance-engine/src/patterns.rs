//! Shared keyword sets and snippet helpers for clause matching

/// Phrases that establish ADGM as the governing jurisdiction
pub const ADGM_JURISDICTION_KEYWORDS: &[&str] =
    &["adgm", "abu dhabi global market", "adgm courts"];

/// Foreign court references that conflict with an ADGM jurisdiction clause
pub const FORBIDDEN_JURISDICTION_KEYWORDS: &[&str] = &[
    "uae federal courts",
    "dubai courts",
    "dubai international financial centre",
    "difc courts",
];

/// Governing-law references incompatible with ADGM documents
pub const FORBIDDEN_GOVERNING_LAW_KEYWORDS: &[&str] = &["uae federal law", "dubai law"];

/// Execution-block keywords
pub const SIGNATURE_KEYWORDS: &[&str] = &["signature", "signed by", "witness", "notary"];

/// Structural keywords expected in a properly drafted legal document
pub const STRUCTURE_KEYWORDS: &[&str] = &["clause", "section", "article"];

/// Check whether any keyword from the set occurs in the (lowercased) text.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text_lower.contains(kw))
}

/// Extract a snippet around a keyword match (up to ~150 characters)
pub fn extract_snippet(text: &str, keyword: &str) -> String {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();

    if let Some(pos) = text_lower.find(&keyword_lower) {
        let start = floor_char_boundary(text, pos.saturating_sub(50));
        let end = ceil_char_boundary(text, (pos + keyword.len() + 50).min(text.len()));
        format!("...{}...", text[start..end].trim())
    } else {
        text.chars().take(150).collect::<String>()
    }
}

/// Find the span of a keyword match for comment anchoring.
/// Returns (start_offset, end_offset) if found.
pub fn find_text_position(text: &str, keyword: &str) -> Option<(usize, usize)> {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();

    text_lower.find(&keyword_lower).map(|start| {
        let context_start = floor_char_boundary(text, start.saturating_sub(20));
        let context_end = ceil_char_boundary(text, (start + keyword.len() + 80).min(text.len()));
        (context_start, context_end)
    })
}

fn floor_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

fn ceil_char_boundary(text: &str, mut idx: usize) -> usize {
    while idx < text.len() && !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
