use ego_tree::iter::Edge;
use scraper::{ElementRef, Html};

use crate::{ExtractError, ExtractSettings};

/// A parsed HTML document plus pre-order queries over its element tree.
///
/// Every query walks the tree from the root, parents before children and
/// siblings left to right, so "first" always means first in document order.
pub(crate) struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub(crate) fn parse(markup: &str, settings: &ExtractSettings) -> Result<Self, ExtractError> {
        if markup.len() > settings.max_document_bytes {
            return Err(ExtractError::DocumentTooLarge {
                max_bytes: settings.max_document_bytes,
                actual: markup.len(),
            });
        }

        let html = Html::parse_document(markup);
        if settings.strict_markup && !html.errors.is_empty() {
            return Err(ExtractError::Markup {
                errors: html.errors.iter().map(|e| e.to_string()).collect(),
            });
        }
        if !html.errors.is_empty() {
            crawl_logging::crawl_trace!(
                "parser recovered from {} markup error(s)",
                html.errors.len()
            );
        }

        Ok(Self { html })
    }

    /// All elements in document order.
    pub(crate) fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().traverse().filter_map(|edge| match edge {
            Edge::Open(node) => ElementRef::wrap(node),
            Edge::Close(_) => None,
        })
    }

    pub(crate) fn first_element(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|element| element.value().name() == tag)
    }

    /// First `tag` element that has a `container` element among its ancestors.
    pub(crate) fn first_element_within(
        &self,
        container: &str,
        tag: &str,
    ) -> Option<ElementRef<'_>> {
        let mut open_containers = 0usize;
        for edge in self.html.tree.root().traverse() {
            match edge {
                Edge::Open(node) => {
                    let Some(element) = ElementRef::wrap(node) else {
                        continue;
                    };
                    let name = element.value().name();
                    if name == container {
                        open_containers += 1;
                    } else if open_containers > 0 && name == tag {
                        return Some(element);
                    }
                }
                Edge::Close(node) => {
                    let closes_container = ElementRef::wrap(node)
                        .is_some_and(|element| element.value().name() == container);
                    if closes_container {
                        open_containers = open_containers.saturating_sub(1);
                    }
                }
            }
        }
        None
    }

    /// Values of `attr` on every `tag` element that carries it, in document order.
    pub(crate) fn attribute_values<'a>(
        &'a self,
        tag: &'a str,
        attr: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.elements()
            .filter(move |element| element.value().name() == tag)
            .filter_map(move |element| element.value().attr(attr))
    }
}

/// Concatenation of every descendant text node, untrimmed.
pub(crate) fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}
