//! Quote export adapters.

mod local_exporter;
mod markdown;

pub use local_exporter::LocalQuoteExporter;
pub use markdown::render_quote;
