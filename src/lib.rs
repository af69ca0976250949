//! mznfmt - A width-aware pretty-printer for MiniZinc models
//!
//! This library renders a typed MiniZinc AST back to source text. Each
//! top-level item is first translated into a layout document of text,
//! candidate line breaks and grouped lists, then rendered against a column
//! budget: breaks always open lines during the walk and a joining pass
//! splices lines back together wherever they fit, preferring to keep breaks
//! at outer structures.

pub mod ast;
pub mod error;
pub mod printer;

pub use error::{Error, Result};
pub use printer::Printer;

use ast::Model;

/// Format a model at the default column width
pub fn format(model: &Model) -> String {
    Printer::new().model_to_string(model)
}

/// Format a model at the given column width
pub fn format_width(model: &Model, width: usize) -> String {
    Printer::with_width(width).model_to_string(model)
}
