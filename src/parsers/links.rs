use crate::parsers::text::element_text;
use scraper::{Html, Selector};
use url::Url;

/// An element matching a link selector, with its `href` made absolute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Trimmed visible text; may be empty
    pub text: String,
    pub url: Url,
}

/// Finds every element matching `selector` in document order and resolves its
/// `href` against `page_url`.
///
/// Elements without an `href`, and hrefs that do not resolve, are skipped.
pub fn anchors(html: &str, page_url: &Url, selector: &Selector) -> Vec<Anchor> {
    let doc = Html::parse_document(html);

    let anchors = doc
        .select(selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            match page_url.join(href) {
                Ok(url) => Some(Anchor {
                    text: element_text(element),
                    url,
                }),
                Err(e) => {
                    ::log::debug!("Unresolvable href {:?} on {}: {}", href, page_url, e);
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    ::log::debug!("Selector matched {} anchors on {}", anchors.len(), page_url);
    anchors
}
