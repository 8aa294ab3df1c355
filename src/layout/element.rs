//! Page elements as delivered by an upstream layout engine.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A text element on a page.
///
/// Elements are read-only inputs: a layout engine produces them and the
/// analyzers only look at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    /// Page number, starting at 1
    pub page_id: u32,
    /// Bounding box in page coordinates
    pub bbox: Rect,
    /// Text content of the element
    pub text: String,
}

impl PageElement {
    /// Create a new element.
    pub fn new(page_id: u32, bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            page_id,
            bbox,
            text: text.into(),
        }
    }
}

/// Source of page elements for one document.
///
/// Each call to [`elements`](PageLayoutSource::elements) starts a fresh pass
/// over the document in page order.
pub trait PageLayoutSource {
    /// Iterate over all elements, page by page.
    fn elements(&self) -> Box<dyn Iterator<Item = PageElement> + '_>;
}

/// Elements of the first page only.
///
/// Stops at the first element whose page number is past 1, so the rest of the
/// document is never produced.
pub fn first_page_elements<S: PageLayoutSource + ?Sized>(
    source: &S,
) -> impl Iterator<Item = PageElement> + '_ {
    source.elements().take_while(|e| e.page_id <= 1)
}

/// A layout source backed by a vector of elements.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLayout {
    elements: Vec<PageElement>,
}

impl InMemoryLayout {
    /// Wrap already extracted elements.
    pub fn new(elements: Vec<PageElement>) -> Self {
        Self { elements }
    }
}

impl PageLayoutSource for InMemoryLayout {
    fn elements(&self) -> Box<dyn Iterator<Item = PageElement> + '_> {
        Box::new(self.elements.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(page_id: u32, text: &str) -> PageElement {
        PageElement::new(page_id, Rect::new(0.0, 0.0, 10.0, 10.0), text)
    }

    #[test]
    fn test_source_is_restartable() {
        let layout = InMemoryLayout::new(vec![element(1, "a"), element(2, "b")]);
        assert_eq!(layout.elements().count(), 2);
        assert_eq!(layout.elements().count(), 2);
    }

    #[test]
    fn test_first_page_elements() {
        let layout = InMemoryLayout::new(vec![
            element(1, "header"),
            element(1, "body"),
            element(2, "next page"),
            element(1, "never reached"),
        ]);
        let texts: Vec<String> = first_page_elements(&layout).map(|e| e.text).collect();
        assert_eq!(texts, vec!["header", "body"]);
    }
}
