//! AST node definitions for MiniZinc models
//!
//! This module defines the abstract syntax tree consumed by the printer.
//! The printer only reads these nodes; construction is up to the caller
//! (typically a parser front-end or a model builder).

/// A complete MiniZinc model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub items: Vec<Item>,
}

/// A top-level model item
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `include "<filename>";`
    Include { filename: String },
    /// A declaration item; the expression is expected to be a `VarDecl`,
    /// so item-level annotations ride on the expression
    VarDecl(Expression),
    /// `<id> = <expr>;`
    Assign { id: String, expr: Expression },
    /// `constraint <expr>;`
    Constraint(Expression),
    /// `solve satisfy;` / `solve minimize <e>;` / `solve maximize <e>;`
    Solve {
        annotations: Vec<Expression>,
        goal: SolveGoal,
    },
    /// `output <expr>;`
    Output(Expression),
    /// Function, predicate, test or annotation declaration
    Function(FunctionItem),
}

/// Solve goals
#[derive(Debug, Clone, PartialEq)]
pub enum SolveGoal {
    Satisfy,
    Minimize(Expression),
    Maximize(Expression),
}

/// Function-like item: function, predicate, test or annotation declaration
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionItem {
    /// Return type-inst; selects the item keyword
    pub ti: TypeInst,
    pub id: String,
    pub params: Vec<VarDecl>,
    pub annotations: Vec<Expression>,
    pub body: Option<Expression>,
}

/// An expression together with its annotation chain
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExprKind,
    pub annotations: Vec<Expression>,
}

impl Expression {
    /// Wrap a kind with no annotations
    pub fn new(kind: ExprKind) -> Self {
        Expression {
            kind,
            annotations: Vec::new(),
        }
    }

    /// Wrap a kind with an annotation chain
    pub fn with_annotations(kind: ExprKind, annotations: Vec<Expression>) -> Self {
        Expression { kind, annotations }
    }
}

impl From<ExprKind> for Expression {
    fn from(kind: ExprKind) -> Self {
        Expression::new(kind)
    }
}

/// Expression node kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    IntLit(i64),
    FloatLit(f64),
    BoolLit(bool),
    StringLit(String),
    Id(String),
    /// Type-inst identifier (`$T`)
    TiId(String),
    /// The anonymous variable `_`
    AnonVar,
    SetLit(SetLit),
    ArrayLit {
        /// Inclusive (lower, upper) index bounds per dimension
        dims: Vec<(i64, i64)>,
        /// Elements in row-major order
        elements: Vec<Expression>,
    },
    ArrayAccess {
        array: Box<Expression>,
        indices: Vec<Expression>,
    },
    Comprehension(Comprehension),
    IfThenElse {
        /// `(condition, branch)` pairs: the `if` clause and any `elseif` clauses
        branches: Vec<(Expression, Expression)>,
        else_expr: Box<Expression>,
    },
    BinOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    UnOp {
        op: UnaryOperator,
        expr: Box<Expression>,
    },
    Call {
        id: String,
        args: Vec<Expression>,
    },
    VarDecl(VarDecl),
    Let {
        /// Var-decl bindings or constraint expressions
        bindings: Vec<Expression>,
        body: Box<Expression>,
    },
    TypeInst(TypeInst),
}

/// Set literal: enumerated values or compact integer ranges
#[derive(Debug, Clone, PartialEq)]
pub enum SetLit {
    Exprs(Vec<Expression>),
    /// Inclusive (min, max) ranges
    IntRanges(Vec<(i64, i64)>),
}

/// Array or set comprehension
#[derive(Debug, Clone, PartialEq)]
pub struct Comprehension {
    pub body: Box<Expression>,
    pub generators: Vec<Generator>,
    pub where_clause: Option<Box<Expression>>,
    pub is_set: bool,
}

/// A single `idents in source` generator
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    pub vars: Vec<String>,
    pub in_expr: Expression,
}

/// Variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ti: TypeInst,
    pub id: String,
    /// Set for compiler-introduced variables
    pub introduced: bool,
    pub rhs: Option<Box<Expression>>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mult,
    Div,
    IntDiv,
    Mod,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    In,
    Subset,
    Superset,
    Union,
    Diff,
    SymDiff,
    Intersect,
    Range,
    Concat,
    Equiv,
    Impl,
    RevImpl,
    Or,
    And,
    Xor,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Plus,
    Minus,
}

/// Type-inst expression: optional array index ranges, qualified base type,
/// optional domain
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInst {
    /// Index-set range expressions; non-empty marks an array type-inst
    pub ranges: Vec<Expression>,
    pub ty: Type,
    /// Domain expression; `None` renders the textual base type
    pub domain: Option<Box<Expression>>,
}

impl TypeInst {
    /// A scalar type-inst with no domain
    pub fn plain(ty: Type) -> Self {
        TypeInst {
            ranges: Vec::new(),
            ty,
            domain: None,
        }
    }

    /// A scalar type-inst constrained to a domain expression
    pub fn with_domain(ty: Type, domain: Expression) -> Self {
        TypeInst {
            ranges: Vec::new(),
            ty,
            domain: Some(Box::new(domain)),
        }
    }
}

/// Base type with instantiation and set-of qualifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type {
    pub inst: Inst,
    pub set: bool,
    pub base: BaseType,
}

impl Type {
    pub fn new(inst: Inst, base: BaseType) -> Self {
        Type {
            inst,
            set: false,
            base,
        }
    }

    /// `par int`, also the ti-hint under which array index ranges render
    pub const fn par_int() -> Self {
        Type {
            inst: Inst::Par,
            set: false,
            base: BaseType::Int,
        }
    }

    /// `par bool`, the return type marking a test item
    pub const fn par_bool() -> Self {
        Type {
            inst: Inst::Par,
            set: false,
            base: BaseType::Bool,
        }
    }

    /// `var bool`, the return type marking a predicate item
    pub const fn var_bool() -> Self {
        Type {
            inst: Inst::Var,
            set: false,
            base: BaseType::Bool,
        }
    }
}

/// Instantiation qualifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Par,
    Var,
    Svar,
    Any,
}

/// Base types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Int,
    Bool,
    Float,
    String,
    Ann,
    Bot,
    Unknown,
}
