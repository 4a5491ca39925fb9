//! Text Normalizer — strips lightweight markup from model output.
//!
//! Steps run in a fixed order; heading markers are removed before whitespace
//! is collapsed.

use std::sync::LazyLock;

use regex::Regex;

pub const NOT_AVAILABLE: &str = "Analysis not available.";

const BULLET: &str = "• ";

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#+[ \t]*").expect("valid heading regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]\n]*\]\([^)\n]*\)").expect("valid link regex"));
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Cleans raw model output. Total: absent, empty or markup-only input yields
/// [`NOT_AVAILABLE`].
pub fn normalize(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.is_empty() => text,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let text = raw.replace("**", "");
    let text = emphasis_to_bullets(&text);
    let text = text.replace("\\n", "\n");
    let text = HEADING.replace_all(&text, "");
    let text = LINK.replace_all(&text, "");

    let paragraphs: Vec<String> = PARAGRAPH_BREAK
        .split(&text)
        .map(|p| WHITESPACE.replace_all(p, " ").trim().to_string())
        .filter(|p| !p.is_empty())
        .map(|p| capitalize_first(&p))
        .collect();

    if paragraphs.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    paragraphs.join("\n\n")
}

/// A `*` at the start of a word becomes a bullet prefix. When it opens
/// emphasis (text follows directly), the matching `*` on the same line is
/// dropped. Any other `*` also becomes a bullet, so no content is lost.
fn emphasis_to_bullets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut open = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' if prev.map_or(true, char::is_whitespace) => {
                out.push_str(BULLET);
                open = chars.peek().is_some_and(|next| !next.is_whitespace());
            }
            '*' if open => open = false,
            '*' => out.push_str(BULLET),
            '\n' => {
                open = false;
                out.push(c);
            }
            _ => out.push(c),
        }
        prev = Some(c);
    }

    out
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
