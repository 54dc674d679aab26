//! Inline link extraction

use std::sync::OnceLock;

use regex::Regex;

use crate::document::Link;

use super::is_fence;

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid pattern"))
}

/// Collect every inline `[text](target)` link outside fenced code blocks.
///
/// A target with a quoted title (`(url "title")`) keeps only the URL part.
pub(super) fn extract(lines: &[&str]) -> Vec<Link> {
    let mut links = Vec::new();
    let mut in_fence = false;

    for (idx, line) in lines.iter().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        for captures in link_pattern().captures_iter(line) {
            let target = captures[2]
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();
            links.push(Link {
                text: captures[1].to_string(),
                target,
                line: idx + 1,
            });
        }
    }

    links
}
