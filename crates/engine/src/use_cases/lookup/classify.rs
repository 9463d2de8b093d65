//! Search page classification.
//!
//! The only place that touches the HTML tree. Everything it returns is owned
//! data, so the (non-`Send`) parsed document never outlives this call.

use std::sync::LazyLock;

use nrdbot_domain::{Candidate, CardInfo, ClassifiedResult};
use scraper::{ElementRef, Html, Selector};

use super::markup::substitute;
use super::sanitize::clean;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

static DETAIL_PANEL: LazyLock<Selector> = LazyLock::new(|| selector(".panel"));
static TITLE_CELL: LazyLock<Selector> = LazyLock::new(|| selector(r#"[data-th="Title"]"#));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static PANEL_HEADING: LazyLock<Selector> = LazyLock::new(|| selector(".panel-heading"));
static CARD_TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.card-title"));
static CARD_INFO: LazyLock<Selector> = LazyLock::new(|| selector(".card-info"));
static CARD_TEXT_PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector(".card-text p"));
static CARD_FLAVOR: LazyLock<Selector> = LazyLock::new(|| selector(".card-flavor"));
static CARD_ILLUSTRATOR: LazyLock<Selector> = LazyLock::new(|| selector(".card-illustrator"));

/// Substitute markup in a raw page body, then classify it.
pub fn classify_page(body: &str) -> ClassifiedResult {
    classify(&substitute(body))
}

/// Classify an already-substituted page.
///
/// A unique detail panel wins over any candidate list on the same page.
pub fn classify(html: &str) -> ClassifiedResult {
    let document = Html::parse_document(html);

    let panels: Vec<ElementRef> = document.select(&DETAIL_PANEL).collect();
    if let [panel] = panels.as_slice() {
        return ClassifiedResult::SingleCard(extract_card(*panel));
    }

    let candidates: Vec<Candidate> = document
        .select(&TITLE_CELL)
        .filter_map(extract_candidate)
        .collect();

    if candidates.is_empty() {
        ClassifiedResult::NoMatch
    } else {
        ClassifiedResult::MultipleCandidates(candidates)
    }
}

/// Concatenated text of every element under `root` matching `selector`.
fn text_of(root: ElementRef, selector: &Selector) -> String {
    root.select(selector).flat_map(|e| e.text()).collect()
}

fn href_of(root: ElementRef, selector: &Selector) -> Option<String> {
    root.select(selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
}

fn extract_candidate(cell: ElementRef) -> Option<Candidate> {
    let title = clean(&cell.text().collect::<String>());
    let Some(url) = href_of(cell, &ANCHOR) else {
        tracing::debug!(title = %title, "Skipping candidate without a detail link");
        return None;
    };
    Some(Candidate { title, url })
}

fn extract_card(panel: ElementRef) -> CardInfo {
    // Chat clients render the plain diamond suit as an emoji
    let title = clean(&text_of(panel, &PANEL_HEADING)).replace('♦', "◆");

    let footer = clean(&text_of(panel, &CARD_ILLUSTRATOR));
    let faction = footer.split(' ').next().unwrap_or_default().to_string();

    let paragraphs = panel
        .select(&CARD_TEXT_PARAGRAPH)
        .map(|p| clean(&p.text().collect::<String>()))
        .filter(|p| !p.is_empty())
        .collect();

    let flavor = Some(clean(&text_of(panel, &CARD_FLAVOR))).filter(|f| !f.is_empty());

    CardInfo {
        title,
        url: href_of(panel, &CARD_TITLE_LINK).unwrap_or_default(),
        faction,
        stat_line: clean(&text_of(panel, &CARD_INFO)),
        paragraphs,
        flavor,
        footer,
    }
}
