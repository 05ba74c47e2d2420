use crate::parsers::text::{char_len, element_text, join_paragraphs};
use crate::results::{PRICE_UNAVAILABLE, PageRecord};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static HEADING: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector("p.description"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector("h4.pull-right.price"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("built-in product selectors are valid")
}

/// Fields read off a rendered product page, before the quality gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl ProductFields {
    /// Reads title, description and price from a product page.
    ///
    /// The title is the first `<h1>`, falling back to `title_hint`. The
    /// description is the `p.description` text unless that is shorter than
    /// `min_description_len` characters, in which case every non-empty paragraph
    /// on the page is joined instead. A missing price becomes `"N/A"`.
    pub fn parse(html: &str, title_hint: &str, min_description_len: usize) -> Self {
        let doc = Html::parse_document(html);

        let title = doc
            .select(&HEADING)
            .next()
            .map(element_text)
            .unwrap_or_else(|| title_hint.to_string());

        let mut description = doc
            .select(&DESCRIPTION)
            .next()
            .map(element_text)
            .unwrap_or_default();

        if char_len(&description) < min_description_len {
            description = join_paragraphs(doc.select(&PARAGRAPH).map(element_text));
        }

        let price = doc
            .select(&PRICE)
            .next()
            .map(element_text)
            .unwrap_or_else(|| PRICE_UNAVAILABLE.to_string());

        Self {
            title,
            description,
            price,
        }
    }

    /// Applies the quality gate: `None` when the description is shorter than
    /// `quality_min_len` characters.
    pub fn into_record(self, url: &str, quality_min_len: usize) -> Option<PageRecord> {
        if char_len(&self.description) < quality_min_len {
            return None;
        }

        Some(PageRecord {
            title: self.title,
            url: url.to_string(),
            description: self.description,
            price: self.price,
        })
    }
}
