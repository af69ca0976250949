//! Width-aware layout engine
//!
//! Walks a document tree and accumulates items, one per printed document;
//! each item is an ordered sequence of lines. Break nodes always open a new
//! line during the walk; a later joining pass greedily splices lines back
//! onto their predecessors wherever the column budget allows, preferring to
//! keep breaks at outer structures.

use std::collections::BTreeMap;
use std::fmt;

use crate::printer::document::{DocList, Document};

/// Default target column width
pub const DEFAULT_WIDTH: usize = 80;

/// Default indentation step
pub const INDENT_BASE: usize = 4;

/// One rendered line: an indentation column and text fragments
#[derive(Debug, Clone, Default)]
struct Line {
    indentation: usize,
    length: usize,
    text: Vec<String>,
}

impl Line {
    fn new(indentation: usize) -> Self {
        Line {
            indentation,
            length: 0,
            text: Vec::new(),
        }
    }

    /// Whether `extra` more characters still fit within `max_width`
    fn fits(&self, extra: usize, max_width: usize) -> bool {
        self.indentation + self.length + extra <= max_width
    }

    fn add(&mut self, s: String) {
        self.length += s.len();
        self.text.push(s);
    }

    fn concatenate(&mut self, other: Line) {
        self.length += other.length;
        self.text.extend(other.text);
    }
}

/// Candidate lines for the joining pass, grouped by priority
///
/// Priority is the document level at which a break was created; candidates
/// in deeper buckets are joined first. Each candidate may be linked to the
/// most recently recorded candidate at the nearest lower priority: when a
/// candidate fails to join, everything linked to it is dropped as well.
#[derive(Debug, Clone, Default)]
struct SimplifyLedger {
    /// priority -> candidate line indices, in insertion order
    lines: BTreeMap<usize, Vec<usize>>,
    /// `(line, linked)` pairs: when `line` fails to join, `linked` is dropped
    links: Vec<(usize, usize)>,
    /// most recently recorded candidate per priority
    last_added: BTreeMap<usize, usize>,
}

impl SimplifyLedger {
    fn add(&mut self, priority: usize, line: usize) {
        if let Some((_, &linked)) = self.last_added.range(..priority).next_back() {
            self.links.push((line, linked));
        }
        self.last_added.insert(priority, line);
        self.lines.entry(priority).or_default().push(line);
    }

    /// All candidates, deepest priority bucket first
    fn candidates(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for bucket in self.lines.values().rev() {
            out.extend_from_slice(bucket);
        }
        out
    }

    /// Drop a candidate; a candidate dropped as failed also drops every
    /// candidate reachable from it over the link table
    fn remove(&mut self, mut working: Option<&mut Vec<usize>>, line: usize, success: bool) {
        let mut pending = vec![line];
        while let Some(l) = pending.pop() {
            if let Some(v) = working.as_mut() {
                v.retain(|&x| x != l);
            }
            for bucket in self.lines.values_mut() {
                bucket.retain(|&x| x != l);
            }
            if !success {
                for &(from, linked) in &self.links {
                    if from == l && linked != l {
                        pending.push(linked);
                    }
                }
            }
        }
    }

    /// Shift every stored index >= `line` down by one after that line was
    /// spliced into its predecessor
    fn decrement_from(&mut self, working: Option<&mut Vec<usize>>, line: usize) {
        if let Some(v) = working {
            for x in v.iter_mut() {
                if *x >= line {
                    *x -= 1;
                }
            }
        }
        for bucket in self.lines.values_mut() {
            for x in bucket.iter_mut() {
                if *x >= line {
                    *x -= 1;
                }
            }
        }
        for (from, linked) in self.links.iter_mut() {
            if *from >= line {
                *from -= 1;
            }
            if *linked >= line {
                *linked -= 1;
            }
        }
    }
}

/// One printed document rendered as an independent sequence of lines
#[derive(Debug, Clone)]
struct RenderedItem {
    lines: Vec<Line>,
    to_simplify: SimplifyLedger,
    not_to_simplify: SimplifyLedger,
}

impl RenderedItem {
    fn new() -> Self {
        RenderedItem {
            lines: vec![Line::new(0)],
            to_simplify: SimplifyLedger::default(),
            not_to_simplify: SimplifyLedger::default(),
        }
    }

    fn current_col(&self) -> usize {
        self.lines
            .last()
            .map(|l| l.indentation + l.length)
            .unwrap_or(0)
    }

    fn last_line_mut(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.lines.push(Line::new(0));
        }
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
}

/// The layout engine
///
/// Each call to [`print`](PrettyPrinter::print) renders one document as a
/// new item; `Display` renders all accumulated items back-to-back, one
/// newline-terminated line at a time.
#[derive(Debug, Clone)]
pub struct PrettyPrinter {
    max_width: usize,
    indentation_base: usize,
    simplify: bool,
    deep_simplify: bool,
    items: Vec<RenderedItem>,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        PrettyPrinter::new(DEFAULT_WIDTH, INDENT_BASE, true, true)
    }
}

impl PrettyPrinter {
    /// Create an engine
    ///
    /// `max_width` is the target column width and `indentation_base` the
    /// fallback indentation step. `simplify` enables the line-joining pass;
    /// `deep_simplify` records break lines as joining candidates.
    pub fn new(
        max_width: usize,
        indentation_base: usize,
        simplify: bool,
        deep_simplify: bool,
    ) -> Self {
        PrettyPrinter {
            max_width,
            indentation_base,
            simplify,
            deep_simplify,
            items: Vec::new(),
        }
    }

    /// Render one document as a new item
    pub fn print(&mut self, doc: &Document) {
        let mut item = RenderedItem::new();
        self.print_document(&mut item, doc, true, 0, "", "", 0);
        if self.simplify {
            self.simplify_item(&mut item);
        }
        self.items.push(item);
    }

    fn print_document(
        &self,
        item: &mut RenderedItem,
        doc: &Document,
        alignment: bool,
        alignment_col: usize,
        before: &str,
        after: &str,
        level: usize,
    ) {
        match doc {
            Document::List(list) => {
                self.print_doc_list(item, list, alignment_col, before, after, level);
            }
            Document::Text(s) => {
                let s = format!("{before}{s}{after}");
                self.print_string(item, s, alignment, alignment_col);
            }
            Document::Break { hard } => {
                self.print_string(item, before.to_string(), alignment, alignment_col);
                self.add_break_line(item, alignment_col, level, *hard);
                self.print_string(item, after.to_string(), alignment, alignment_col);
            }
        }
    }

    /// Append a string to the current line if it fits, else open a new line
    /// at the alignment column, falling back to the indentation base when
    /// even a fresh aligned line could not hold it
    fn print_string(&self, item: &mut RenderedItem, s: String, alignment: bool, alignment_col: usize) {
        let line = item.last_line_mut();
        if line.fits(s.len(), self.max_width) {
            line.add(s);
        } else {
            let col = if alignment && alignment_col + s.len() <= self.max_width {
                alignment_col
            } else {
                self.indentation_base
            };
            item.lines.push(Line::new(col));
            item.last_line_mut().add(s);
        }
    }

    /// Open the line a break produces, recording it as a joining candidate
    fn add_break_line(&self, item: &mut RenderedItem, indentation: usize, level: usize, hard: bool) {
        item.lines.push(Line::new(indentation));
        if self.deep_simplify {
            let line = item.lines.len() - 1;
            item.to_simplify.add(level, line);
            if hard {
                item.not_to_simplify.add(0, line);
            }
        }
    }

    fn print_doc_list(
        &self,
        item: &mut RenderedItem,
        list: &DocList,
        alignment_col: usize,
        super_before: &str,
        super_after: &str,
        level: usize,
    ) {
        if list.unbreakable {
            item.lines.push(Line::new(alignment_col));
        }
        let mut child_col = if list.alignment {
            item.current_col() + list.begin_token.len()
        } else {
            alignment_col
        };
        // the last child that still receives the separator to its right
        let last_visible = list.docs.iter().rposition(|d| !d.is_break());
        if list.docs.is_empty() {
            let s = format!(
                "{super_before}{}{}{super_after}",
                list.begin_token, list.end_token
            );
            self.print_string(item, s, true, child_col);
        }
        let count = list.docs.len();
        for (i, child) in list.docs.iter().enumerate() {
            if child.is_break() && !list.alignment {
                child_col += self.indentation_base;
            }
            let before = if i == 0 {
                format!("{super_before}{}", list.begin_token)
            } else {
                String::new()
            };
            let after = if i + 1 == count {
                format!("{}{super_after}", list.end_token)
            } else if child.is_break() || last_visible.map_or(true, |lv| lv <= i) {
                String::new()
            } else {
                list.separator.clone()
            };
            self.print_document(item, child, list.alignment, child_col, &before, &after, level + 1);
        }
        if list.unbreakable {
            let line = item.lines.len() - 1;
            self.simplify_line(item, line, None);
        }
    }

    /// Try to splice `line` onto its predecessor; returns whether it joined
    fn simplify_line(
        &self,
        item: &mut RenderedItem,
        line: usize,
        mut working: Option<&mut Vec<usize>>,
    ) -> bool {
        if line == 0 || line >= item.lines.len() {
            item.to_simplify.remove(working, line, false);
            return false;
        }
        if !item.lines[line - 1].fits(item.lines[line].length, self.max_width) {
            item.to_simplify.remove(working, line, false);
            return false;
        }
        item.to_simplify.remove(working.as_mut().map(|v| &mut **v), line, true);
        let removed = item.lines.remove(line);
        item.lines[line - 1].concatenate(removed);
        item.to_simplify.decrement_from(working, line);
        item.not_to_simplify.decrement_from(None, line);
        true
    }

    /// The joining pass: exclude hard-break lines, then repeatedly try the
    /// deepest remaining candidate, stopping at the first failure
    fn simplify_item(&self, item: &mut RenderedItem) {
        for line in item.not_to_simplify.candidates() {
            item.to_simplify.remove(None, line, false);
        }
        let mut working = item.to_simplify.candidates();
        while !working.is_empty() {
            let line = working[0];
            if !self.simplify_line(item, line, Some(&mut working)) {
                break;
            }
        }
    }
}

impl fmt::Display for PrettyPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            for line in &item.lines {
                write!(f, "{:width$}", "", width = line.indentation)?;
                for s in &line.text {
                    f.write_str(s)?;
                }
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
