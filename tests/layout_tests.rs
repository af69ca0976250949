//! Layout engine tests for mznfmt
//!
//! These drive the engine with hand-built documents, covering line
//! building, alignment, indentation stepping, the joining pass and the
//! unbreakable-list rule.

use mznfmt::printer::document::{DocList, Document};
use mznfmt::printer::{PrettyPrinter, INDENT_BASE};
use pretty_assertions::assert_eq;

/// Render one document with the default engine settings at `width`
fn render(doc: &Document, width: usize) -> String {
    let mut engine = PrettyPrinter::new(width, INDENT_BASE, true, true);
    engine.print(doc);
    engine.to_string()
}

/// Render with the joining pass disabled
fn render_unjoined(doc: &Document, width: usize) -> String {
    let mut engine = PrettyPrinter::new(width, INDENT_BASE, false, false);
    engine.print(doc);
    engine.to_string()
}

mod basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_document() {
        assert_eq!(render(&Document::text("hello"), 80), "hello\n");
    }

    #[test]
    fn empty_list_renders_begin_and_end() {
        let dl = DocList::new("[", ", ", "]");
        assert_eq!(render(&dl.into(), 80), "[]\n");
    }

    #[test]
    fn list_separates_children() {
        let mut dl = DocList::new("(", ", ", ")");
        dl.push_text("a");
        dl.push_text("b");
        dl.push_text("c");
        assert_eq!(render(&dl.into(), 80), "(a, b, c)\n");
    }

    #[test]
    fn nested_lists() {
        let mut inner = DocList::new("(", ", ", ")");
        inner.push_text("x");
        inner.push_text("y");
        let mut outer = DocList::new("", "", "");
        outer.push_text("foo");
        outer.push(inner);
        assert_eq!(render(&outer.into(), 80), "foo(x, y)\n");
    }

    #[test]
    fn multiple_prints_accumulate_items() {
        let mut engine = PrettyPrinter::default();
        engine.print(&Document::text("a"));
        engine.print(&Document::text("b"));
        assert_eq!(engine.to_string(), "a\nb\n");
    }
}

mod breaks {
    use super::*;
    use pretty_assertions::assert_eq;

    fn broken_pair() -> DocList {
        let mut dl = DocList::new("", "", "");
        dl.push_text("aaa");
        dl.push_break();
        dl.push_text("bbb");
        dl
    }

    #[test]
    fn soft_break_joins_when_it_fits() {
        assert_eq!(render(&broken_pair().into(), 80), "aaabbb\n");
    }

    #[test]
    fn soft_break_stays_when_too_wide() {
        assert_eq!(render(&broken_pair().into(), 4), "aaa\nbbb\n");
    }

    #[test]
    fn hard_break_never_joins() {
        let mut dl = DocList::new("", "", "");
        dl.push_text("aaa");
        dl.push_hard_break();
        dl.push_text("bbb");
        assert_eq!(render(&dl.into(), 80), "aaa\nbbb\n");
    }

    #[test]
    fn joining_pass_can_be_disabled() {
        assert_eq!(render_unjoined(&broken_pair().into(), 80), "aaa\nbbb\n");
    }

    #[test]
    fn list_of_only_breaks_still_frames() {
        let mut dl = DocList::new("(", ", ", ")");
        dl.push_break();
        dl.push_break();
        assert_eq!(render(&dl.into(), 80), "()\n");
    }

    #[test]
    fn deeper_breaks_join_first() {
        let mut inner = DocList::new("", "", "");
        inner.push_text("yy");
        inner.push_break();
        inner.push_text("zz");
        let mut outer = DocList::new("", "", "");
        outer.push_text("xx");
        outer.push_break();
        outer.push(inner);
        // width 5 lets the inner break join but not the outer one
        assert_eq!(render(&outer.into(), 5), "xx\nyyzz\n");
    }
}

mod indentation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aligned_list_wraps_to_alignment_column() {
        let mut dl = DocList::new("(", ", ", ")");
        dl.push_text("aaa");
        dl.push_break();
        dl.push_text("bbb");
        // the continuation line aligns to the column after the begin token
        assert_eq!(render(&dl.into(), 6), "(aaa, \n bbb)\n");
    }

    #[test]
    fn unaligned_list_steps_indentation_per_break() {
        let mut dl = DocList::unaligned("", "", "");
        dl.push_text("aaa");
        dl.push_break();
        dl.push_text("bbb");
        dl.push_break();
        dl.push_text("ccc");
        assert_eq!(
            render_unjoined(&dl.into(), 20),
            "aaa\n    bbb\n        ccc\n"
        );
    }

    #[test]
    fn overflowing_string_falls_back_to_indentation_base() {
        assert_eq!(render(&Document::text("hello"), 0), "\n    hello\n");
    }
}

mod unbreakable {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_unbreakable_tail() -> Document {
        let mut tail = DocList::new("", "", "");
        tail.set_unbreakable();
        tail.push_text("bar");
        let mut dl = DocList::new("", "", "");
        dl.push_text("foo");
        dl.push(tail);
        dl.into()
    }

    #[test]
    fn unbreakable_list_pulls_back_onto_previous_line() {
        // the pull-back happens during the walk, not in the joining pass
        assert_eq!(render_unjoined(&with_unbreakable_tail(), 80), "foobar\n");
    }

    #[test]
    fn unbreakable_list_stays_when_too_wide() {
        assert_eq!(render_unjoined(&with_unbreakable_tail(), 4), "foo\nbar\n");
    }
}
