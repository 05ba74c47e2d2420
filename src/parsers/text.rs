use scraper::ElementRef;

/// Separator placed between paragraphs when they are joined into one description
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Text below `element` with every text node trimmed and blank nodes dropped.
///
/// Nodes are concatenated without a separator, so `<p> <b>Fast</b> laptop</p>`
/// reads as `Fastlaptop`.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Joins the non-empty paragraphs, one blank line apart
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// Length in characters, which is what the description thresholds count
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
