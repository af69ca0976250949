//! Expression-to-document mapping
//!
//! One document per AST node, built bottom-up. Grouping, separators and
//! break placement here decide everything the layout engine may later do
//! with the expression; the mapper itself never looks at the column width.

use crate::ast::{
    BinaryOperator, BaseType, Comprehension, ExprKind, Expression, Generator, Inst, SetLit, Type,
    TypeInst, UnaryOperator, VarDecl,
};
use crate::printer::document::{DocList, Document};
use crate::printer::precedence::needs_parens;

/// Map an expression to its document, annotation chain included
pub(crate) fn expression_to_document(e: &Expression) -> Document {
    let mut wrapper = DocList::new("", "", "");
    wrapper.push(map_expression(e));
    if !e.annotations.is_empty() {
        wrapper.push(annotations_to_document(&e.annotations));
    }
    wrapper.into()
}

/// Render an annotation chain as ` :: a1 :: a2 ...`
pub(crate) fn annotations_to_document(annotations: &[Expression]) -> Document {
    let mut dl = DocList::new(" :: ", " :: ", "");
    for a in annotations {
        dl.push(expression_to_document(a));
    }
    dl.into()
}

fn map_expression(e: &Expression) -> Document {
    match &e.kind {
        ExprKind::IntLit(v) => Document::text(v.to_string()),
        ExprKind::FloatLit(v) => Document::text(v.to_string()),
        ExprKind::BoolLit(v) => Document::text(if *v { "true" } else { "false" }),
        ExprKind::StringLit(s) => Document::text(format!("\"{s}\"")),
        ExprKind::Id(id) => Document::text(id.clone()),
        ExprKind::TiId(id) => Document::text(format!("${id}")),
        ExprKind::AnonVar => Document::text("_"),
        ExprKind::SetLit(sl) => map_set_lit(sl),
        ExprKind::ArrayLit { dims, elements } => map_array_lit(dims, elements),
        ExprKind::ArrayAccess { array, indices } => map_array_access(array, indices),
        ExprKind::Comprehension(c) => map_comprehension(c),
        ExprKind::IfThenElse {
            branches,
            else_expr,
        } => map_if_then_else(branches, else_expr),
        ExprKind::BinOp { left, op, right } => map_bin_op(left, *op, right),
        ExprKind::UnOp { op, expr } => map_un_op(*op, expr),
        ExprKind::Call { id, args } => map_call(id, args),
        ExprKind::VarDecl(vd) => var_decl_to_document(vd),
        ExprKind::Let { bindings, body } => map_let(bindings, body),
        ExprKind::TypeInst(ti) => type_inst_to_document(ti),
    }
}

fn map_set_lit(sl: &SetLit) -> Document {
    match sl {
        SetLit::Exprs(values) => {
            let mut dl = DocList::new("{", ", ", "}");
            for v in values {
                dl.push(expression_to_document(v));
            }
            dl.into()
        }
        SetLit::IntRanges(ranges) => {
            if let [(min, max)] = ranges.as_slice() {
                let mut dl = DocList::unaligned("", "..", "");
                dl.push_text(min.to_string());
                dl.push_text(max.to_string());
                dl.into()
            } else {
                // several ranges print in enumerated form
                let mut dl = DocList::new("{", ", ", "}");
                for &(min, max) in ranges {
                    for v in min..=max {
                        dl.push_text(v.to_string());
                    }
                }
                dl.into()
            }
        }
    }
}

fn map_array_lit(dims: &[(i64, i64)], elements: &[Expression]) -> Document {
    match dims {
        [(1, _)] => {
            let mut dl = DocList::new("[", ", ", "]");
            for e in elements {
                dl.push(expression_to_document(e));
            }
            dl.into()
        }
        [(1, rows), (1, cols)] => {
            let (rows, cols) = (*rows, *cols);
            let mut dl = DocList::new("[| ", " | ", " |]");
            for i in 0..rows {
                let mut row = DocList::new("", ", ", "");
                for j in 0..cols {
                    row.push(expression_to_document(&elements[(i * cols + j) as usize]));
                }
                dl.push(row);
                if i + 1 != rows {
                    dl.push_hard_break();
                }
            }
            dl.into()
        }
        _ => {
            // non-default index bases use the arrayNd(ranges..., [elems]) form
            let mut dl = DocList::new("", "", "");
            dl.push_text(format!("array{}d", dims.len()));
            let mut args = DocList::new("(", ", ", ")");
            for (lo, hi) in dims {
                args.push_text(format!("{lo}..{hi}"));
            }
            let mut arr = DocList::new("[", ", ", "]");
            for e in elements {
                arr.push(expression_to_document(e));
            }
            args.push(arr);
            dl.push(args);
            dl.into()
        }
    }
}

fn map_array_access(array: &Expression, indices: &[Expression]) -> Document {
    let mut dl = DocList::new("", "", "");
    dl.push(expression_to_document(array));
    let mut idx = DocList::new("[", ", ", "]");
    for i in indices {
        idx.push(expression_to_document(i));
    }
    dl.push(idx);
    dl.into()
}

fn map_comprehension(c: &Comprehension) -> Document {
    let mut dl = if c.is_set {
        DocList::new("{ ", " | ", " }")
    } else {
        DocList::new("[ ", " | ", " ]")
    };
    dl.push(expression_to_document(&c.body));
    let mut head = DocList::new("", " ", "");
    head.push(generators_to_document(&c.generators, ", "));
    if let Some(where_clause) = &c.where_clause {
        head.push_text("where");
        head.push(expression_to_document(where_clause));
    }
    dl.push(head);
    dl.into()
}

/// `idents in source` groups; identifiers within a group join on `ident_sep`
fn generators_to_document(generators: &[Generator], ident_sep: &str) -> Document {
    let mut gens = DocList::new("", ", ", "");
    for g in generators {
        let mut gen = DocList::new("", "", "");
        let mut idents = DocList::new("", ident_sep, "");
        for v in &g.vars {
            idents.push_text(v.clone());
        }
        gen.push(idents);
        gen.push_text(" in ");
        gen.push(expression_to_document(&g.in_expr));
        gens.push(gen);
    }
    gens.into()
}

fn map_if_then_else(branches: &[(Expression, Expression)], else_expr: &Expression) -> Document {
    let mut dl = DocList::new("", "", "");
    for (i, (cond, branch)) in branches.iter().enumerate() {
        dl.push_text(if i == 0 { "if " } else { " elseif " });
        dl.push(expression_to_document(cond));
        dl.push_text(" then ");
        let mut body = DocList::unaligned("", "", "");
        body.push_break();
        body.push(expression_to_document(branch));
        dl.push(body);
        dl.push_text(" ");
    }
    dl.push_break();
    dl.push_text("else ");
    let mut body = DocList::unaligned("", "", "");
    body.push_break();
    body.push(expression_to_document(else_expr));
    dl.push(body);
    dl.push_text(" ");
    dl.push_break();
    dl.push_text("endif");
    dl.into()
}

fn map_bin_op(left: &Expression, op: BinaryOperator, right: &Expression) -> Document {
    let parens = needs_parens(op, left, right);
    let mut lhs = if parens.left {
        DocList::new("(", " ", ")")
    } else {
        DocList::new("", " ", "")
    };
    lhs.push(expression_to_document(left));
    let mut rhs = if parens.right {
        DocList::new("(", " ", ")")
    } else {
        DocList::new("", "", "")
    };
    rhs.push(expression_to_document(right));
    let mut dl = DocList::new("", operator_text(op), "");
    dl.push(lhs);
    if prefers_line_break(op) {
        dl.push_break();
    }
    dl.push(rhs);
    dl.into()
}

/// Textual form of a binary operator
fn operator_text(op: BinaryOperator) -> &'static str {
    use BinaryOperator::*;
    match op {
        Plus => "+",
        Minus => "-",
        Mult => "*",
        Div => "/",
        IntDiv => " div ",
        Mod => " mod ",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
        Eq => "==",
        NotEq => "!=",
        In => " in ",
        Subset => " subset ",
        Superset => " superset ",
        Union => " union ",
        Diff => " diff ",
        SymDiff => " symdiff ",
        Intersect => " intersect ",
        Range => "..",
        Concat => "++",
        Equiv => " <-> ",
        Impl => " -> ",
        RevImpl => " <- ",
        Or => " \\/ ",
        And => " /\\ ",
        Xor => " xor ",
    }
}

/// Operators whose operands prefer to stand on separate lines
fn prefers_line_break(op: BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Concat | BinaryOperator::Or | BinaryOperator::And
    )
}

fn map_un_op(op: UnaryOperator, expr: &Expression) -> Document {
    let mut dl = DocList::new("", "", "");
    dl.push_text(match op {
        UnaryOperator::Not => "not ",
        UnaryOperator::Plus => "+",
        UnaryOperator::Minus => "-",
    });
    let needs_paren = matches!(expr.kind, ExprKind::BinOp { .. } | ExprKind::UnOp { .. });
    let mut operand = if needs_paren {
        DocList::new("(", " ", ")")
    } else {
        DocList::new("", " ", "")
    };
    operand.push(expression_to_document(expr));
    dl.push(operand);
    dl.into()
}

fn map_call(id: &str, args: &[Expression]) -> Document {
    // A single comprehension argument reads better generator-outside:
    // forall([f(i) | i in 1..10]) prints as forall (i in 1..10) (f(i))
    if let [arg] = args {
        if let ExprKind::Comprehension(c) = &arg.kind {
            if !c.is_set {
                return map_generator_call(id, c);
            }
        }
    }
    let mut dl = DocList::new(format!("{id}("), ", ", ")");
    for a in args {
        dl.push(expression_to_document(a));
    }
    dl.into()
}

fn map_generator_call(id: &str, c: &Comprehension) -> Document {
    let mut dl = DocList::new("", " ", "");
    dl.push_text(id);
    let mut args = DocList::unaligned("", " ", "");
    let mut gens = DocList::new("(", " ", ")");
    gens.push(generators_to_document(&c.generators, ","));
    if let Some(where_clause) = &c.where_clause {
        gens.push_text("where");
        gens.push(expression_to_document(where_clause));
    }
    args.push(gens);
    let mut body = DocList::new("(", "", ")");
    body.push_break();
    body.push(expression_to_document(&c.body));
    body.push_break();
    args.push(body);
    dl.push(args);
    dl.into()
}

pub(crate) fn var_decl_to_document(vd: &VarDecl) -> Document {
    let mut dl = DocList::new("", "", "");
    dl.push(type_inst_to_document(&vd.ti));
    dl.push_text(": ");
    dl.push_text(vd.id.clone());
    if vd.introduced {
        dl.push_text(" ::var_is_introduced");
    }
    if let Some(rhs) = &vd.rhs {
        dl.push_text(" = ");
        dl.push(expression_to_document(rhs));
    }
    dl.into()
}

fn map_let(bindings: &[Expression], body: &Expression) -> Document {
    // two or more bindings pin the let to its multi-line shape
    let multi = bindings.len() > 1;

    let mut lets = DocList::new("", " ", "");
    for (i, binding) in bindings.iter().enumerate() {
        if i != 0 {
            if multi {
                lets.push_hard_break();
            } else {
                lets.push_break();
            }
        }
        let mut entry = DocList::new("", " ", ",");
        if !matches!(binding.kind, ExprKind::VarDecl(_)) {
            entry.push_text("constraint");
        }
        entry.push(expression_to_document(binding));
        lets.push(entry);
    }

    let mut letin = DocList::unaligned("", "", "");
    if multi {
        letin.push_hard_break();
    } else {
        letin.push_break();
    }
    letin.push(lets);

    let mut inexpr = DocList::unaligned("", "", "");
    inexpr.push_break();
    let mut body_doc = DocList::new("", "", "");
    body_doc.push(expression_to_document(body));
    inexpr.push(body_doc);

    let mut dl = DocList::new("", "", "");
    dl.push_text("let {");
    dl.push(letin);
    if multi {
        dl.push_hard_break();
    } else {
        dl.push_break();
    }
    dl.push_text("} in (");
    dl.push(inexpr);
    dl.push_text(")");
    dl.into()
}

pub(crate) fn type_inst_to_document(ti: &TypeInst) -> Document {
    let mut dl = DocList::new("", "", "");
    if !ti.ranges.is_empty() {
        dl.push_text("array[");
        let mut ranges = DocList::new("", ", ", "");
        for r in &ti.ranges {
            ranges.push(ti_expression_to_document(&Type::par_int(), Some(r)));
        }
        dl.push(ranges);
        dl.push_text("] of ");
    }
    dl.push(ti_expression_to_document(&ti.ty, ti.domain.as_deref()));
    dl.into()
}

/// Inst and set-of prefixes, then either the domain expression or the bare
/// base type name
fn ti_expression_to_document(ty: &Type, domain: Option<&Expression>) -> Document {
    let mut dl = DocList::unaligned("", "", "");
    match ty.inst {
        Inst::Par => {}
        Inst::Var => dl.push_text("var "),
        Inst::Svar => dl.push_text("svar "),
        Inst::Any => dl.push_text("any "),
    }
    if ty.set {
        dl.push_text("set of ");
    }
    match domain {
        Some(e) => dl.push(expression_to_document(e)),
        None => dl.push_text(match ty.base {
            BaseType::Int => "int",
            BaseType::Bool => "bool",
            BaseType::Float => "float",
            BaseType::String => "string",
            BaseType::Ann => "ann",
            BaseType::Bot => "bot",
            BaseType::Unknown => "???",
        }),
    }
    dl.into()
}
