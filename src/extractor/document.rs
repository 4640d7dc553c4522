//! Lenient, read-only view over an HTML page.
//!
//! Parsing never fails: html5ever repairs whatever markup it is given, so a
//! truncated or malformed page simply yields fewer matches.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Every element matching `selector`, in document order.
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Attribute of the first match. Only the first match is consulted; a
    /// missing or empty attribute there counts as not found.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.first(selector).and_then(|el| attr_of(el, attr))
    }

    /// Trimmed text of the first match, `None` when blank.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector).and_then(|el| non_empty(text_of(el)))
    }
}

pub fn attr_of(el: ElementRef<'_>, attr: &str) -> Option<String> {
    el.value()
        .attr(attr)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Nearest element matching `selector`, starting with `el` itself.
pub fn closest<'a>(el: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    if selector.matches(&el) {
        return Some(el);
    }
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}
