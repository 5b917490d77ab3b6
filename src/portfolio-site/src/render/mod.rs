//! Static page rendering using Handlebars.
//!
//! Templates and the stylesheet are embedded in the binary at compile time.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{create_handlebars_registry, PageRenderer};
