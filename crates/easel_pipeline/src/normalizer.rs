//! Response normalization.
//!
//! Models often wrap structured output in Markdown code fences despite being
//! told not to. When the answer opens with a recognized fence marker, every
//! recognized marker is removed; otherwise only surrounding whitespace goes.

/// Recognized fence markers.
///
/// Tagged markers must precede the bare marker so their language tag is
/// removed along with the backticks.
pub const FENCE_MARKERS: &[&str] = &[
    "```json",
    "```JSON",
    "```mermaid",
    "```javascript",
    "```js",
    "```markdown",
    "```md",
    "```plaintext",
    "```text",
    "```",
];

/// Strips recognized fence markers and surrounding whitespace.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
///
/// # Examples
///
/// ```
/// use easel_pipeline::normalizer::normalize;
///
/// assert_eq!(normalize("```json\n[1, 2]\n```\n"), "[1, 2]");
/// assert_eq!(normalize("  graph TD\n  A --> B  "), "graph TD\n  A --> B");
/// ```
pub fn normalize(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let trimmed = text.trim();
    if !starts_with_fence(trimmed) {
        return trimmed.to_string();
    }

    FENCE_MARKERS
        .iter()
        .fold(trimmed.to_string(), |acc, marker| acc.replace(marker, ""))
        .trim()
        .to_string()
}

/// True when `text` opens with any recognized marker.
pub fn starts_with_fence(text: &str) -> bool {
    FENCE_MARKERS.iter().any(|marker| text.starts_with(marker))
}
