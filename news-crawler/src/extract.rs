//! HTML extraction of news items from a section listing page.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{CrawlerError, Result};

/// Item containers, in the order they are scanned.
const CONTAINERS: [&str; 2] = ["div.block-list__item", "div.preview__title"];

/// One listing entry before date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    pub title: String,
    pub link: String,
    pub date_text: String,
}

/// Compiled selectors for listing pages.
pub struct Extractor {
    containers: Vec<Selector>,
    anchor: Selector,
    time: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        let containers = CONTAINERS
            .iter()
            .map(|css| parse_selector(css))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            containers,
            anchor: parse_selector("a")?,
            time: parse_selector("time")?,
        })
    }

    /// Every container holding both a link and a `time`; relative links are joined onto `base_url`.
    pub fn extract(&self, html: &str, base_url: &Url) -> Vec<ListingItem> {
        let document = Html::parse_document(html);
        self.containers
            .iter()
            .flat_map(|selector| document.select(selector))
            .filter_map(|element| self.item_from(element, base_url))
            .collect()
    }

    fn item_from(&self, element: ElementRef<'_>, base_url: &Url) -> Option<ListingItem> {
        let anchor = element.select(&self.anchor).next()?;
        let time = element.select(&self.time).next()?;

        let title = collapse_whitespace(anchor.text());
        let href = anchor.value().attr("href")?;
        let link = match base_url.join(href.trim()) {
            Ok(link) => link.to_string(),
            Err(e) => {
                debug!(href, error = %e, "Skipping item with bad link");
                return None;
            }
        };
        if title.is_empty() {
            return None;
        }

        Some(ListingItem {
            title,
            link,
            date_text: collapse_whitespace(time.text()),
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CrawlerError::Selector(format!("{}: {:?}", css, e)))
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://polit74.ru").unwrap()
    }

    #[test]
    fn test_extracts_both_container_shapes_in_order() {
        let html = r#"
            <div class="preview__title"><a href="/society/b/">Второй</a><time>14:05</time></div>
            <div class="block-list__item">
                <a href="/society/a/">
                    Первый
                    заголовок
                </a>
                <span><time> 3 декабря 2024, 17:45 </time></span>
            </div>
        "#;

        let items = Extractor::new().unwrap().extract(html, &base());

        assert_eq!(
            items,
            vec![
                ListingItem {
                    title: "Первый заголовок".to_string(),
                    link: "https://polit74.ru/society/a/".to_string(),
                    date_text: "3 декабря 2024, 17:45".to_string(),
                },
                ListingItem {
                    title: "Второй".to_string(),
                    link: "https://polit74.ru/society/b/".to_string(),
                    date_text: "14:05".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_skips_incomplete_items() {
        let html = r#"
            <div class="block-list__item"><a href="/x/">Без даты</a></div>
            <div class="block-list__item"><time>14:05</time></div>
            <div class="block-list__item"><a>Без ссылки</a><time>14:05</time></div>
            <div class="block-list__item"><a href="/y/">  </a><time>14:05</time></div>
        "#;

        assert!(Extractor::new().unwrap().extract(html, &base()).is_empty());
    }

    #[test]
    fn test_absolute_links_are_kept() {
        let html = r#"<div class="block-list__item"><a href="https://other.example/n/1">Т</a><time>10:00</time></div>"#;
        let items = Extractor::new().unwrap().extract(html, &base());
        assert_eq!(items[0].link, "https://other.example/n/1");
    }
}
