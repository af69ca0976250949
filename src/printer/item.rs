//! Item-to-document mapping
//!
//! Top-level model items dispatch here; expressions inside them go through
//! the expression mapper.

use crate::ast::{BaseType, Expression, FunctionItem, Item, SolveGoal, Type};
use crate::printer::document::{DocList, Document};
use crate::printer::expr::{
    annotations_to_document, expression_to_document, type_inst_to_document, var_decl_to_document,
};

/// Map a top-level item to its document
pub(crate) fn item_to_document(item: &Item) -> Document {
    match item {
        Item::Include { filename } => Document::text(format!("include \"{filename}\";")),
        Item::VarDecl(decl) => {
            let mut dl = DocList::new("", " ", ";");
            dl.push(expression_to_document(decl));
            dl.into()
        }
        Item::Assign { id, expr } => {
            let mut dl = DocList::new("", " = ", ";");
            dl.push_text(id.clone());
            dl.push(expression_to_document(expr));
            dl.into()
        }
        Item::Constraint(expr) => {
            let mut dl = DocList::new("constraint ", " ", ";");
            dl.push(expression_to_document(expr));
            dl.into()
        }
        Item::Solve { annotations, goal } => map_solve(annotations, goal),
        Item::Output(expr) => {
            let mut dl = DocList::new("output ", " ", ";");
            dl.push(expression_to_document(expr));
            dl.into()
        }
        Item::Function(f) => map_function(f),
    }
}

fn map_solve(annotations: &[Expression], goal: &SolveGoal) -> Document {
    let mut dl = DocList::new("", "", ";");
    dl.push_text("solve");
    if !annotations.is_empty() {
        dl.push(annotations_to_document(annotations));
    }
    match goal {
        SolveGoal::Satisfy => dl.push_text(" satisfy"),
        SolveGoal::Minimize(e) => {
            dl.push_text(" minimize ");
            dl.push(expression_to_document(e));
        }
        SolveGoal::Maximize(e) => {
            dl.push_text(" maximize ");
            dl.push(expression_to_document(e));
        }
    }
    dl.into()
}

/// The item keyword follows the return type-inst: `annotation` for an ann
/// return with no body, `test` for par bool, `predicate` for var bool, and
/// `function <typeinst>:` otherwise
fn map_function(f: &FunctionItem) -> Document {
    let scalar = f.ti.ranges.is_empty();
    let mut dl = if scalar && !f.ti.ty.set && f.ti.ty.base == BaseType::Ann && f.body.is_none() {
        DocList::unaligned("annotation ", " ", ";")
    } else if scalar && f.ti.ty == Type::par_bool() {
        DocList::unaligned("test ", "", ";")
    } else if scalar && f.ti.ty == Type::var_bool() {
        DocList::unaligned("predicate ", "", ";")
    } else {
        let mut dl = DocList::unaligned("function ", "", ";");
        dl.push(type_inst_to_document(&f.ti));
        dl.push_text(": ");
        dl
    };
    dl.push_text(f.id.clone());
    if !f.params.is_empty() {
        let mut params = DocList::new("(", ", ", ")");
        for p in &f.params {
            let mut param = DocList::new("", "", "");
            param.set_unbreakable();
            param.push(var_decl_to_document(p));
            params.push(param);
        }
        dl.push(params);
    }
    if !f.annotations.is_empty() {
        dl.push(annotations_to_document(&f.annotations));
    }
    if let Some(body) = &f.body {
        dl.push_text(" = ");
        dl.push_break();
        dl.push(expression_to_document(body));
    }
    dl.into()
}
