//! Layout analysis over positioned page elements.
//!
//! - [`element`]: page elements and the layout-source seam
//! - [`analyzer`]: page bounding box, form-type label, digital signatures

pub mod analyzer;
pub mod element;

// Re-export main types
pub use analyzer::{FormRegion, LayoutAnalyzer, LayoutRecord};
pub use element::{first_page_elements, InMemoryLayout, PageElement, PageLayoutSource};
