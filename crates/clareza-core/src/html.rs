//! HTML extraction for rich-text post bodies.
//!
//! Two independent pipelines live here. [`html_to_text`] produces the flat
//! prose used for sentence, word, transition and passive voice analysis.
//! [`split_paragraphs`] works on the raw HTML with its own tag rules and is
//! only used for paragraph counting. They are deliberately not unified: the
//! paragraph count depends on block-level tag semantics that the flat text
//! no longer carries.
//!
//! Both are regex based. Malformed markup degrades gracefully: a tag the
//! patterns do not recognise may leak into the output, which is accepted.

use std::sync::LazyLock;

use regex::Regex;

/// Blocks whose content is never prose.
static NON_PROSE_BLOCKS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ["script", "style", "pre", "code"].map(|tag| {
        Regex::new(&format!(r"(?is)<{tag}.*?</{tag}>")).expect("valid regex")
    })
});

/// Any tag.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Closing tags of block elements that end a paragraph.
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|div|li|h1|h2|h3|h4|h5|h6)>").expect("valid regex")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Convert HTML to whitespace-normalized plain text.
///
/// Drops `<script>`, `<style>`, `<pre>` and `<code>` blocks including their
/// content, replaces every other tag with a space, collapses whitespace runs
/// and trims the result.
#[tracing::instrument(skip_all, fields(html_len = html.len()))]
pub fn html_to_text(html: &str) -> String {
    let mut cleaned = html.to_string();
    for block in NON_PROSE_BLOCKS.iter() {
        cleaned = block.replace_all(&cleaned, "").into_owned();
    }
    let cleaned = TAG.replace_all(&cleaned, " ");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}

/// Split raw HTML into paragraphs.
///
/// Closing `</p>`, `</div>`, `</li>`, `</h1>`..`</h6>` and any `<br>` become
/// line breaks, remaining tags are removed, and the result is split on runs
/// of newlines. Segments are trimmed and empty ones dropped.
#[tracing::instrument(skip_all, fields(html_len = html.len()))]
pub fn split_paragraphs(html: &str) -> Vec<String> {
    let blocks = BLOCK_CLOSE.replace_all(html, "\n");
    let blocks = LINE_BREAK.replace_all(&blocks, "\n");
    let blocks = TAG.replace_all(&blocks, "");

    NEWLINE_RUN
        .split(&blocks)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
