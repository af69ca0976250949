//! Snapshot tests for mznfmt
//!
//! Whole-model renders compared against inline snapshots.

use insta::assert_snapshot;
use mznfmt::ast::*;
use mznfmt::format;

fn int(v: i64) -> Expression {
    Expression::new(ExprKind::IntLit(v))
}

fn id(s: &str) -> Expression {
    Expression::new(ExprKind::Id(s.into()))
}

fn bin(left: Expression, op: BinaryOperator, right: Expression) -> Expression {
    Expression::new(ExprKind::BinOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    })
}

fn call(name: &str, args: Vec<Expression>) -> Expression {
    Expression::new(ExprKind::Call {
        id: name.into(),
        args,
    })
}

fn range(lo: i64, hi: i64) -> Expression {
    bin(int(lo), BinaryOperator::Range, int(hi))
}

fn forall(body: Expression, generators: Vec<Generator>) -> Expression {
    call(
        "forall",
        vec![Expression::new(ExprKind::Comprehension(Comprehension {
            body: Box::new(body),
            generators,
            where_clause: None,
            is_set: false,
        }))],
    )
}

fn generator(vars: &[&str], in_expr: Expression) -> Generator {
    Generator {
        vars: vars.iter().map(|v| v.to_string()).collect(),
        in_expr,
    }
}

#[test]
fn snapshot_small_model() {
    let model = Model {
        items: vec![
            Item::Include {
                filename: "globals.mzn".into(),
            },
            Item::VarDecl(Expression::new(ExprKind::VarDecl(VarDecl {
                ti: TypeInst::with_domain(Type::new(Inst::Var, BaseType::Int), range(1, 9)),
                id: "x".into(),
                introduced: false,
                rhs: None,
            }))),
            Item::Constraint(call(
                "alldifferent",
                vec![Expression::new(ExprKind::ArrayLit {
                    dims: vec![(1, 1)],
                    elements: vec![id("x")],
                })],
            )),
            Item::Solve {
                annotations: vec![],
                goal: SolveGoal::Satisfy,
            },
        ],
    };
    assert_snapshot!(format(&model), @r###"
    include "globals.mzn";
    var 1..9: x;
    constraint alldifferent([x]);
    solve satisfy;
    "###);
}

#[test]
fn snapshot_quantified_constraint() {
    let model = Model {
        items: vec![
            Item::Constraint(forall(
                call("f", vec![id("i"), id("j")]),
                vec![
                    generator(&["i"], range(1, 3)),
                    generator(&["j"], range(1, 3)),
                ],
            )),
            Item::Solve {
                annotations: vec![],
                goal: SolveGoal::Maximize(id("total")),
            },
        ],
    };
    assert_snapshot!(format(&model), @r###"
    constraint forall (i in 1..3, j in 1..3) (f(i, j));
    solve maximize total;
    "###);
}

#[test]
fn snapshot_function_items() {
    let model = Model {
        items: vec![
            Item::Function(FunctionItem {
                ti: TypeInst::plain(Type::var_bool()),
                id: "even".into(),
                params: vec![VarDecl {
                    ti: TypeInst::plain(Type::new(Inst::Var, BaseType::Int)),
                    id: "x".into(),
                    introduced: false,
                    rhs: None,
                }],
                annotations: vec![],
                body: Some(bin(
                    bin(id("x"), BinaryOperator::Mod, int(2)),
                    BinaryOperator::Eq,
                    int(0),
                )),
            }),
            Item::Function(FunctionItem {
                ti: TypeInst::plain(Type::par_bool()),
                id: "is_small".into(),
                params: vec![VarDecl {
                    ti: TypeInst::plain(Type::par_int()),
                    id: "x".into(),
                    introduced: false,
                    rhs: None,
                }],
                annotations: vec![],
                body: Some(bin(id("x"), BinaryOperator::Lt, int(10))),
            }),
        ],
    };
    assert_snapshot!(format(&model), @r###"
    predicate even(var int: x) = x mod 2==0;
    test is_small(int: x) = x<10;
    "###);
}
