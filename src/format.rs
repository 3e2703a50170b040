//! Cleanup and truncation of raw model output to the posting budget.
//!
//! Lengths are counted in characters, not bytes; the platform budget is a
//! character limit and model output is routinely non-ASCII.

/// Marker appended when a post is cut at the budget boundary.
const ELLIPSIS: &str = "...";

fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Prefix of `text` holding at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Strip surrounding whitespace and quote characters from model output.
/// Whitespace inside the quotes is preserved.
fn clean(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

/// Fit cleaned model output into `budget` characters, optionally appending
/// a source URL.
///
/// With a URL, `url_reserve` characters are held back for the shortened
/// link plus separating whitespace and the remainder is the body budget;
/// an over-long body is cut to leave room for the ellipsis marker. The
/// reserve approximates the platform's link shortener and is not an exact
/// guarantee. Without a URL the output never exceeds `budget`.
pub fn format_post(
    raw: &str,
    source_url: Option<&str>,
    budget: usize,
    url_reserve: usize,
) -> String {
    let text = clean(raw);

    match source_url {
        Some(url) => {
            let body_budget = budget.saturating_sub(url_reserve);
            let body = truncate_with_ellipsis(text, body_budget);
            format!("{body}\n\n{url}")
        }
        None => truncate_with_ellipsis(text, budget),
    }
}

fn truncate_with_ellipsis(text: &str, budget: usize) -> String {
    if char_count(text) <= budget {
        return text.to_string();
    }
    let cut = truncate_chars(text, budget.saturating_sub(ELLIPSIS.len()));
    format!("{cut}{ELLIPSIS}")
}
