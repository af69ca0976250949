//! Document tree primitives
//!
//! The layout-aware intermediate representation between the AST mappers and
//! the layout engine. A document encodes literal text, candidate line
//! breaks, and grouped sequences framed by begin/end tokens.

/// A node in the layout document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Literal text emitted verbatim
    Text(String),
    /// A candidate line break; `hard` breaks are kept out of the
    /// priority-based line-joining pass
    Break { hard: bool },
    /// A grouped sequence of children joined by a separator
    List(DocList),
}

impl Document {
    /// Create a text document
    pub fn text(s: impl Into<String>) -> Document {
        Document::Text(s.into())
    }

    pub(crate) fn is_break(&self) -> bool {
        matches!(self, Document::Break { .. })
    }
}

/// A grouped sequence of documents
///
/// Children are separated by `separator` and framed by `begin_token` and
/// `end_token`. An aligned list indents wrapped children to the column just
/// after its begin token; a non-aligned list steps the indentation by the
/// engine's indentation base at each break instead. An unbreakable list is
/// emitted onto its own line and then pulled back onto the previous line
/// when it fits.
#[derive(Debug, Clone, PartialEq)]
pub struct DocList {
    pub(crate) docs: Vec<Document>,
    pub(crate) begin_token: String,
    pub(crate) separator: String,
    pub(crate) end_token: String,
    pub(crate) alignment: bool,
    pub(crate) unbreakable: bool,
}

impl DocList {
    /// An aligned list
    pub fn new(
        begin_token: impl Into<String>,
        separator: impl Into<String>,
        end_token: impl Into<String>,
    ) -> Self {
        DocList {
            docs: Vec::new(),
            begin_token: begin_token.into(),
            separator: separator.into(),
            end_token: end_token.into(),
            alignment: true,
            unbreakable: false,
        }
    }

    /// A non-aligned list: wrapped children indent by steps of the
    /// indentation base
    pub fn unaligned(
        begin_token: impl Into<String>,
        separator: impl Into<String>,
        end_token: impl Into<String>,
    ) -> Self {
        DocList {
            alignment: false,
            ..DocList::new(begin_token, separator, end_token)
        }
    }

    /// Append a child document
    pub fn push(&mut self, doc: impl Into<Document>) {
        self.docs.push(doc.into());
    }

    /// Append a text child
    pub fn push_text(&mut self, s: impl Into<String>) {
        self.docs.push(Document::text(s));
    }

    /// Append a candidate line break
    pub fn push_break(&mut self) {
        self.docs.push(Document::Break { hard: false });
    }

    /// Append a line break that the joining pass must keep
    pub fn push_hard_break(&mut self) {
        self.docs.push(Document::Break { hard: true });
    }

    /// Emit this list onto its own line and pull it back when it fits
    pub fn set_unbreakable(&mut self) {
        self.unbreakable = true;
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl From<DocList> for Document {
    fn from(list: DocList) -> Document {
        Document::List(list)
    }
}
