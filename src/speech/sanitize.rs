//! TTS input sanitization
//!
//! Lesson content arrives as a loosely-structured HTML/Markdown hybrid from
//! the AI content generator. A speech synthesizer fed that raw text reads
//! the markup aloud, so everything non-speakable is stripped here before
//! synthesis.
//!
//! The pipeline is an ordered sequence of substitutions; order matters
//! because later patterns assume earlier ones already collapsed certain
//! constructs (links must unwrap before bracket stripping, for example).
//! A regex pipeline rather than a real HTML/Markdown parser: inputs are
//! not valid documents, and the contract is "readable prose survives",
//! not byte-exact markup removal.

use std::sync::LazyLock;

use regex::Regex;

/// HTML tags (angle-bracket delimited)
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Markdown heading markers at line start
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").expect("valid regex"));

/// `**bold**` pairs
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"));

/// `__bold__` pairs
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid regex"));

/// `*italic*` pairs
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid regex"));

/// `_italic_` pairs
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid regex"));

/// `[text](url)` Markdown links
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid regex"));

/// Fenced code blocks
static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));

/// Inline code spans
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("valid regex"));

/// Horizontal-rule lines (3+ repeated `-`, `_`, or `*` alone on a line)
static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|_{3,}|\*{3,})[ \t]*$").expect("valid regex"));

/// Leading list markers (`-`, `*`, `+`, or `N.`) at line start
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+").expect("valid regex"));

/// Emoji and pictographic/symbol Unicode blocks
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F700}-\u{1F77F}", // alchemical symbols
        "\u{1F780}-\u{1F7FF}", // geometric shapes extended
        "\u{1F800}-\u{1F8FF}", // supplemental arrows-C
        "\u{1F900}-\u{1F9FF}", // supplemental symbols & pictographs
        "\u{1FA00}-\u{1FA6F}", // chess symbols
        "\u{1FA70}-\u{1FAFF}", // symbols & pictographs extended-A
        "\u{2600}-\u{26FF}",   // miscellaneous symbols
        "\u{2700}-\u{27BF}",   // dingbats
        "]",
    ))
    .expect("valid regex")
});

/// Leading blockquote markers at line start
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*>[ \t]?").expect("valid regex"));

/// Runs of repeated `!`
static EXCLAMATION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("valid regex"));

/// Runs of repeated `?`
static QUESTION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?{2,}").expect("valid regex"));

/// Runs of repeated `.`
static PERIOD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{2,}").expect("valid regex"));

/// Brace/bracket/paren/angle characters TTS engines tend to read aloud
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}\[\]()<>]").expect("valid regex"));

/// Whitespace runs
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Transform rich lesson content into plain text suitable for a speech
/// synthesizer.
///
/// Strips HTML tags, Markdown markers, emoji, and TTS-hostile punctuation
/// while preserving the semantic words, then collapses whitespace. Empty
/// input yields an empty string. Never panics.
#[must_use]
pub fn clean_text_for_tts(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // 1. HTML tags
    let text = HTML_TAG.replace_all(text, " ");
    // 2. Heading markers
    let text = HEADING.replace_all(&text, "");
    // 3. Bold/italic delimiters, double-char pairs before single-char pairs
    let text = BOLD_STARS.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    // 4. Links: keep the text, drop the URL
    let text = LINK.replace_all(&text, "$1");
    // 5. Code: fenced blocks dropped entirely, inline spans unwrapped
    let text = FENCED_CODE.replace_all(&text, " ");
    let text = INLINE_CODE.replace_all(&text, "$1");
    // 6. Horizontal rules
    let text = HORIZONTAL_RULE.replace_all(&text, "");
    // 7. List markers
    let text = LIST_MARKER.replace_all(&text, "");
    // 8. Emoji and pictographs
    let text = EMOJI.replace_all(&text, " ");
    // 9. Blockquote markers
    let text = BLOCKQUOTE.replace_all(&text, "");
    // 10. Repeated terminal punctuation
    let text = EXCLAMATION_RUN.replace_all(&text, "!");
    let text = QUESTION_RUN.replace_all(&text, "?");
    let text = PERIOD_RUN.replace_all(&text, ".");
    // 11. Bracket characters
    let text = BRACKETS.replace_all(&text, " ");
    // 12. Whitespace collapse
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
