pub use hlogo_common::types::{Span, Spanned};

pub type ItemS = Spanned<Item>;
pub type StmtS = Spanned<Stmt>;
pub type ExprS = Spanned<Expr>;

#[derive(Debug, Default, PartialEq)]
pub struct Program {
    pub items: Vec<ItemS>,
}

impl Program {
    pub fn funs(&self) -> impl Iterator<Item = (&ItemFun, &Span)> {
        self.items.iter().filter_map(|(item, span)| match item {
            Item::Fun(fun) => Some((fun.as_ref(), span)),
            Item::Stmt(_) => None,
        })
    }

    pub fn stmts(&self) -> impl Iterator<Item = (&Stmt, &Span)> {
        self.items.iter().filter_map(|(item, span)| match item {
            Item::Fun(_) => None,
            Item::Stmt(stmt) => Some((stmt, span)),
        })
    }
}

#[derive(Debug, PartialEq)]
pub enum Item {
    Fun(Box<ItemFun>),
    Stmt(Stmt),
}

#[derive(Debug, PartialEq)]
pub struct ItemFun {
    pub name: String,
    pub params: Vec<String>,
    pub body: StmtBlock,
}

#[derive(Debug, Default, PartialEq)]
pub struct StmtBlock {
    pub stmts: Vec<StmtS>,
}

#[derive(Debug, PartialEq)]
pub enum Stmt {
    Call(StmtCall),
    For(Box<StmtFor>),
    ForZip(Box<StmtForZip>),
    If(Box<StmtIf>),
    Move(StmtMove),
    Pen(OpPen),
}

/// A call to a user-defined function. The callee is not resolved, so calls to
/// functions that are never defined are kept as written.
#[derive(Debug, PartialEq)]
pub struct StmtCall {
    pub name: String,
    pub args: Vec<ExprS>,
}

#[derive(Debug, PartialEq)]
pub struct StmtFor {
    pub var: String,
    pub range: RangeArgs,
    pub body: StmtBlock,
}

/// Iterates two ranges in lockstep, stopping at the end of the shorter one.
#[derive(Debug, PartialEq)]
pub struct StmtForZip {
    pub vars: (String, String),
    pub ranges: (RangeArgs, RangeArgs),
    pub body: StmtBlock,
}

#[derive(Debug, PartialEq)]
pub struct StmtIf {
    pub cond: BoolExpr,
    pub then: StmtBlock,
    pub else_: Option<StmtBlock>,
}

#[derive(Debug, PartialEq)]
pub struct StmtMove {
    pub op: OpMove,
    pub value: ExprS,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpMove {
    Forward,
    Backward,
    Left,
    Right,
    Width,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpPen {
    Up,
    Down,
}

/// A numeric literal or a bare identifier. Literals keep their source text.
#[derive(Debug, Eq, PartialEq)]
pub enum Expr {
    Number(String),
    Var(String),
}

impl Expr {
    pub fn text(&self) -> &str {
        match self {
            Expr::Number(text) | Expr::Var(text) => text,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum RangeArgs {
    Stop(String),
    StartStop(String, String),
    StartStopStep(String, String, String),
}

#[derive(Debug, Eq, PartialEq)]
pub enum BoolExpr {
    Compare(BoolCompare),
    Infix(Box<BoolInfix>),
    Not(Box<BoolExpr>),
}

#[derive(Debug, Eq, PartialEq)]
pub struct BoolCompare {
    pub lt: String,
    pub op: OpCompare,
    pub rt: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct BoolInfix {
    pub lt: BoolExpr,
    pub op: OpLogic,
    pub rt: BoolExpr,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpCompare {
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl OpCompare {
    pub fn as_str(self) -> &'static str {
        match self {
            OpCompare::Equal => "==",
            OpCompare::NotEqual => "!=",
            OpCompare::Greater => ">",
            OpCompare::GreaterEqual => ">=",
            OpCompare::Less => "<",
            OpCompare::LessEqual => "<=",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpLogic {
    And,
    Or,
}

/// Loop variables are restricted to the single letters `i` through `z`.
pub fn is_loop_var(name: &str) -> bool {
    matches!(name.as_bytes(), [b'i'..=b'z'])
}
