// Adapters layer: concrete implementations for the analysis service and the page.

pub mod document;
pub mod http;
pub mod terminal;
