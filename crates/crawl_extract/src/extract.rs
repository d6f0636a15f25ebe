use url::Url;

use crate::document::{text_content, ParsedDocument};
use crate::resolve::resolve_reference;
use crate::{ExtractError, ExtractSettings, PageData};

/// Answers heading, paragraph, link and image queries against HTML documents.
///
/// Each call parses its input independently; the extractor itself only holds
/// immutable settings, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    settings: ExtractSettings,
}

impl PageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ExtractSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExtractSettings {
        &self.settings
    }

    /// Text of the first `<h1>` in document order, or an empty string.
    pub fn heading(&self, html: &str) -> Result<String, ExtractError> {
        let doc = self.parse(html)?;
        Ok(heading_of(&doc))
    }

    /// Text of the first `<p>` inside `<main>`, falling back to the first `<p>`
    /// anywhere, or an empty string.
    pub fn lead_paragraph(&self, html: &str) -> Result<String, ExtractError> {
        let doc = self.parse(html)?;
        Ok(lead_paragraph_of(&doc))
    }

    /// Absolute URLs of every `<a href>` in document order.
    pub fn links(&self, html: &str, base: &Url) -> Result<Vec<String>, ExtractError> {
        let doc = self.parse(html)?;
        Ok(self.collect_urls(&doc, "a", "href", base))
    }

    /// Absolute URLs of every `<img src>` in document order.
    pub fn images(&self, html: &str, base: &Url) -> Result<Vec<String>, ExtractError> {
        let doc = self.parse(html)?;
        Ok(self.collect_urls(&doc, "img", "src", base))
    }

    /// All four queries from a single parse, with `page_url` as the base.
    pub fn page_data(&self, html: &str, page_url: &Url) -> Result<PageData, ExtractError> {
        let doc = self.parse(html)?;
        Ok(PageData {
            url: page_url.to_string(),
            heading: heading_of(&doc),
            first_paragraph: lead_paragraph_of(&doc),
            outgoing_links: self.collect_urls(&doc, "a", "href", page_url),
            image_urls: self.collect_urls(&doc, "img", "src", page_url),
        })
    }

    fn parse(&self, html: &str) -> Result<ParsedDocument, ExtractError> {
        ParsedDocument::parse(html, &self.settings)
    }

    fn collect_urls(
        &self,
        doc: &ParsedDocument,
        tag: &str,
        attr: &str,
        base: &Url,
    ) -> Vec<String> {
        let limit = self.settings.max_urls.unwrap_or(usize::MAX);
        let mut urls = Vec::new();
        for raw in doc.attribute_values(tag, attr) {
            if urls.len() >= limit {
                crawl_logging::crawl_debug!("url limit of {limit} reached for <{tag} {attr}>");
                break;
            }
            if let Some(url) = resolve_reference(raw, base) {
                urls.push(url);
            }
        }
        urls
    }
}

fn heading_of(doc: &ParsedDocument) -> String {
    doc.first_element("h1").map(text_content).unwrap_or_default()
}

fn lead_paragraph_of(doc: &ParsedDocument) -> String {
    doc.first_element_within("main", "p")
        .or_else(|| doc.first_element("p"))
        .map(text_content)
        .unwrap_or_default()
}

/// [`PageExtractor::heading`] with default settings.
pub fn extract_heading(html: &str) -> Result<String, ExtractError> {
    PageExtractor::new().heading(html)
}

/// [`PageExtractor::lead_paragraph`] with default settings.
pub fn extract_lead_paragraph(html: &str) -> Result<String, ExtractError> {
    PageExtractor::new().lead_paragraph(html)
}

/// [`PageExtractor::links`] with default settings.
pub fn extract_links(html: &str, base: &Url) -> Result<Vec<String>, ExtractError> {
    PageExtractor::new().links(html, base)
}

/// [`PageExtractor::images`] with default settings.
pub fn extract_images(html: &str, base: &Url) -> Result<Vec<String>, ExtractError> {
    PageExtractor::new().images(html, base)
}
