//! A small fake catalog served from memory.

use crate::config::CatalogConfig;
use crate::render::MemoryRenderer;

pub const BASE: &str = "https://shop.test/catalog";

pub fn config() -> CatalogConfig {
    CatalogConfig {
        politeness_delay_ms: 0,
        ..CatalogConfig::new(BASE)
    }
}

pub fn category_url(category: &str) -> String {
    format!("{BASE}/{category}")
}

pub fn product_url(category: &str, n: usize) -> String {
    format!("{BASE}/{category}/product/{n}")
}

pub fn home_page(menu: &[(&str, &str)]) -> String {
    let items: String = menu
        .iter()
        .map(|(href, text)| format!(r#"<li><a href="{href}">{text}</a></li>"#))
        .collect();
    format!(
        r#"<html><body>
            <ul id="side-menu"><li><a href="/catalog">Home</a></li>{items}</ul>
            <p>Welcome to the shop</p>
        </body></html>"#
    )
}

pub fn category_page(category: &str, products: &[usize]) -> String {
    let thumbnails: String = products
        .iter()
        .map(|n| {
            format!(
                r#"<div class="thumbnail"><div class="caption">
                    <h4 class="pull-right price">$10{n}.00</h4>
                    <a class="title" href="/catalog/{category}/product/{n}">{category} {n}</a>
                </div></div>"#
            )
        })
        .collect();
    format!("<html><body>{thumbnails}</body></html>")
}

pub fn product_page(category: &str, n: usize) -> String {
    let description = format!("{category} {n} ").repeat(20);
    format!(
        r#"<html><body>
            <h1>{category} model {n}</h1>
            <h4 class="pull-right price">$10{n}.00</h4>
            <p class="description">{description}</p>
        </body></html>"#
    )
}

/// Two categories with three products each
pub fn standard_catalog() -> MemoryRenderer {
    let mut renderer = MemoryRenderer::new().with_page(
        BASE,
        home_page(&[
            ("/catalog/computers", "Computers"),
            ("/catalog/phones", "Phones"),
        ]),
    );
    for category in ["computers", "phones"] {
        renderer = renderer.with_page(category_url(category), category_page(category, &[1, 2, 3]));
        for n in 1..=3 {
            renderer = renderer.with_page(product_url(category, n), product_page(category, n));
        }
    }
    renderer
}
