//! MiniZinc printing: document construction and the rendering facade
//!
//! The pipeline has two halves. The mappers in [`expr`] and [`item`]
//! translate AST nodes into a [`document::Document`] tree that encodes
//! text, candidate line breaks, grouping and alignment; the
//! [`layout::PrettyPrinter`] engine then renders that tree against a column
//! budget. [`Printer`] ties the two together behind a small stateless
//! surface.

pub mod document;
pub mod layout;

mod expr;
mod item;
mod precedence;

pub use layout::{PrettyPrinter, DEFAULT_WIDTH, INDENT_BASE};
pub use precedence::{needs_parens, precedence, Parentheses};

use std::io::Write;

use crate::ast::{Expression, Item, Model};
use crate::error::Result;
use crate::printer::document::Document;
use crate::printer::expr::expression_to_document;
use crate::printer::item::item_to_document;

/// Stateless printing facade
///
/// Builds the document for an AST node, renders it through a fresh layout
/// engine, and hands the text to the caller. Separate calls share nothing,
/// so a `Printer` may be used freely across threads by reference.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    width: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

impl Printer {
    /// A printer targeting the default column width
    pub fn new() -> Self {
        Printer {
            width: DEFAULT_WIDTH,
        }
    }

    /// A printer targeting `width` columns
    pub fn with_width(width: usize) -> Self {
        Printer { width }
    }

    /// Render one expression
    pub fn expression_to_string(&self, e: &Expression) -> String {
        self.render(&expression_to_document(e))
    }

    /// Render one item
    pub fn item_to_string(&self, item: &Item) -> String {
        self.render(&item_to_document(item))
    }

    /// Render a whole model, each item independently
    pub fn model_to_string(&self, model: &Model) -> String {
        let mut out = String::new();
        for item in &model.items {
            out.push_str(&self.item_to_string(item));
        }
        out
    }

    /// Print one expression to a sink
    pub fn print_expression<W: Write>(&self, e: &Expression, out: &mut W) -> Result<()> {
        out.write_all(self.expression_to_string(e).as_bytes())?;
        Ok(())
    }

    /// Print one item to a sink
    pub fn print_item<W: Write>(&self, item: &Item, out: &mut W) -> Result<()> {
        out.write_all(self.item_to_string(item).as_bytes())?;
        Ok(())
    }

    /// Print a whole model to a sink, items back-to-back
    pub fn print_model<W: Write>(&self, model: &Model, out: &mut W) -> Result<()> {
        for item in &model.items {
            self.print_item(item, out)?;
        }
        Ok(())
    }

    fn render(&self, doc: &Document) -> String {
        let mut engine = PrettyPrinter::new(self.width, INDENT_BASE, true, true);
        engine.print(doc);
        engine.to_string()
    }
}
