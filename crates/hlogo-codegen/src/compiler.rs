use hlogo_common::error::{Error, ErrorS, NameError};
use hlogo_syntax::ast::{
    Expr, ExprS, ItemFun, OpMove, OpPen, Program, RangeArgs, Span, Stmt, StmtBlock,
};

use crate::boolean::translate_bool;
use crate::range::translate_range;

/// Name of the turtle handle every drawing command is sent to.
const HANDLE: &str = "t";
const INDENT: &str = "    ";

/// Python keywords, minus those the lexer already claims for itself. None of
/// these, nor the turtle handle, can name anything in the generated program.
const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "del", "elif", "except", "finally", "from", "global", "import", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Module-level bindings of the generated program. Only a function definition
/// can rebind these; parameters and loop variables shadow them locally.
const MODULE_NAMES: &[&str] = &["turtle"];

/// Translates a program into a Python script driving the `turtle` module.
///
/// Output is accumulated in memory and only handed back once the whole program
/// has been translated, so a failed translation never yields partial output.
#[derive(Debug, Default)]
pub struct Compiler {
    output: String,
    errors: Vec<ErrorS>,
}

impl Compiler {
    pub fn compile(program: &Program) -> Result<String, Vec<ErrorS>> {
        let mut compiler = Compiler::default();
        compiler.compile_program(program);
        if compiler.errors.is_empty() {
            log::debug!("generated {} bytes of Python", compiler.output.len());
            Ok(compiler.output)
        } else {
            Err(compiler.errors)
        }
    }

    fn compile_program(&mut self, program: &Program) {
        self.emit(0, "import turtle");
        self.emit(0, &format!("{HANDLE} = turtle.Turtle()"));
        self.emit_blank();

        // Definitions are hoisted above every top-level statement.
        for (fun, span) in program.funs() {
            self.compile_fun(fun, span);
        }
        for (stmt, span) in program.stmts() {
            self.compile_stmt(stmt, span, 0);
        }

        self.emit_blank();
        self.emit(0, "turtle.mainloop()");
    }

    fn compile_fun(&mut self, fun: &ItemFun, span: &Span) {
        log::trace!("compiling function {:?}", fun.name);
        self.check_fun_name(&fun.name, span);
        for param in &fun.params {
            self.check_name(param, span);
        }
        self.emit(0, &format!("def {}({}):", fun.name, fun.params.join(", ")));
        self.compile_block(&fun.body, 1);
        self.emit_blank();
    }

    fn compile_block(&mut self, block: &StmtBlock, depth: usize) {
        if block.stmts.is_empty() {
            self.emit(depth, "pass");
        }
        for (stmt, span) in &block.stmts {
            self.compile_stmt(stmt, span, depth);
        }
    }

    fn compile_stmt(&mut self, stmt: &Stmt, span: &Span, depth: usize) {
        match stmt {
            Stmt::Call(call) => {
                self.check_name(&call.name, span);
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.compile_expr(arg))
                    .collect::<Vec<_>>()
                    .join(",");
                self.emit(depth, &format!("{}({})", call.name, args));
            }
            Stmt::For(for_) => {
                self.check_name(&for_.var, span);
                let range = Self::compile_range(&for_.range);
                self.emit(depth, &format!("for {} in {}:", for_.var, range));
                self.compile_block(&for_.body, depth + 1);
            }
            Stmt::ForZip(for_) => {
                let (var1, var2) = &for_.vars;
                self.check_name(var1, span);
                self.check_name(var2, span);
                let (range1, range2) = &for_.ranges;
                self.emit(
                    depth,
                    &format!(
                        "for {},{} in zip({}, {}):",
                        var1,
                        var2,
                        Self::compile_range(range1),
                        Self::compile_range(range2)
                    ),
                );
                self.compile_block(&for_.body, depth + 1);
            }
            Stmt::If(if_) => {
                self.emit(depth, &format!("if {}:", translate_bool(&if_.cond)));
                self.compile_block(&if_.then, depth + 1);
                if let Some(else_) = &if_.else_ {
                    self.emit(depth, "else:");
                    self.compile_block(else_, depth + 1);
                }
            }
            Stmt::Move(move_) => {
                let method = match move_.op {
                    OpMove::Forward => "forward",
                    OpMove::Backward => "backward",
                    OpMove::Left => "left",
                    OpMove::Right => "right",
                    OpMove::Width => "width",
                };
                let value = self.compile_expr(&move_.value);
                self.emit(depth, &format!("{HANDLE}.{method}({value})"));
            }
            Stmt::Pen(op) => {
                let method = match op {
                    OpPen::Up => "penup",
                    OpPen::Down => "pendown",
                };
                self.emit(depth, &format!("{HANDLE}.{method}()"));
            }
        }
    }

    fn compile_expr<'a>(&mut self, (expr, span): &'a ExprS) -> &'a str {
        if let Expr::Var(name) = expr {
            self.check_name(name, span);
        }
        expr.text()
    }

    fn compile_range(range: &RangeArgs) -> String {
        format!("range({})", translate_range(range).join(","))
    }

    fn check_fun_name(&mut self, name: &str, span: &Span) {
        if MODULE_NAMES.contains(&name) {
            self.reserved(name, span);
        } else {
            self.check_name(name, span);
        }
    }

    fn check_name(&mut self, name: &str, span: &Span) {
        if name == HANDLE || KEYWORDS.contains(&name) {
            self.reserved(name, span);
        }
    }

    fn reserved(&mut self, name: &str, span: &Span) {
        let err = NameError::Reserved { name: name.to_string() };
        self.errors.push((Error::NameError(err), span.clone()));
    }

    fn emit(&mut self, depth: usize, line: &str) {
        for _ in 0..depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn emit_blank(&mut self) {
        self.output.push('\n');
    }
}
