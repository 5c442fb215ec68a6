//! Human-readable views of a parsed program: an indented tree dump and a
//! Graphviz export. Neither has any effect on code generation.

use crate::ast::{
    BoolExpr, Expr, Item, ItemFun, OpLogic, OpMove, OpPen, Program, RangeArgs, Stmt, StmtBlock,
};

use std::fmt::Write;

#[derive(Debug, PartialEq)]
struct Node {
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn branch(label: &str, children: Vec<Node>) -> Self {
        Self { label: label.to_string(), children }
    }

    fn leaf(kind: &str, text: &str) -> Self {
        Self { label: format!("{kind} {text:?}"), children: Vec::new() }
    }
}

/// Renders the program as an indented tree, one node per line.
pub fn pretty(program: &Program) -> String {
    fn walk(node: &Node, depth: usize, out: &mut String) {
        let _ = writeln!(out, "{:indent$}{}", "", node.label, indent = depth * 2);
        for child in &node.children {
            walk(child, depth + 1, out);
        }
    }

    let mut out = String::new();
    walk(&tree(program), 0, &mut out);
    out
}

/// Renders the program as a Graphviz digraph, laid out top-down.
pub fn dot(program: &Program) -> String {
    fn walk(node: &Node, next_id: &mut usize, out: &mut String) -> usize {
        let id = *next_id;
        *next_id += 1;
        let label = node.label.replace('\\', "\\\\").replace('"', "\\\"");
        let _ = writeln!(out, "    n{id} [label=\"{label}\"];");
        for child in &node.children {
            let child_id = walk(child, next_id, out);
            let _ = writeln!(out, "    n{id} -> n{child_id};");
        }
        id
    }

    let mut out = String::from("digraph program {\n    rankdir=TD;\n");
    walk(&tree(program), &mut 0, &mut out);
    out.push_str("}\n");
    out
}

fn tree(program: &Program) -> Node {
    let items = program
        .items
        .iter()
        .map(|(item, _)| match item {
            Item::Fun(fun) => fun_tree(fun),
            Item::Stmt(stmt) => stmt_tree(stmt),
        })
        .collect();
    Node::branch("program", items)
}

fn fun_tree(fun: &ItemFun) -> Node {
    let params = fun.params.iter().map(|param| Node::leaf("NAME", param)).collect();
    Node::branch(
        "function_def",
        vec![Node::leaf("NAME", &fun.name), Node::branch("params", params), block_tree(&fun.body)],
    )
}

fn block_tree(block: &StmtBlock) -> Node {
    Node::branch("block", block.stmts.iter().map(|(stmt, _)| stmt_tree(stmt)).collect())
}

fn stmt_tree(stmt: &Stmt) -> Node {
    match stmt {
        Stmt::Call(call) => {
            let args = call.args.iter().map(|(arg, _)| expr_tree(arg)).collect();
            Node::branch(
                "function_call",
                vec![Node::leaf("NAME", &call.name), Node::branch("args", args)],
            )
        }
        Stmt::For(for_) => Node::branch(
            "single_for",
            vec![Node::leaf("VAR", &for_.var), range_tree(&for_.range), block_tree(&for_.body)],
        ),
        Stmt::ForZip(for_) => Node::branch(
            "double_for",
            vec![
                Node::leaf("VAR", &for_.vars.0),
                Node::leaf("VAR", &for_.vars.1),
                range_tree(&for_.ranges.0),
                range_tree(&for_.ranges.1),
                block_tree(&for_.body),
            ],
        ),
        Stmt::If(if_) => {
            let mut children = vec![bool_tree(&if_.cond), block_tree(&if_.then)];
            if let Some(else_) = &if_.else_ {
                children.push(block_tree(else_));
            }
            Node::branch("conditional", children)
        }
        Stmt::Move(move_) => {
            let op = match move_.op {
                OpMove::Forward => "FD",
                OpMove::Backward => "BK",
                OpMove::Left => "LT",
                OpMove::Right => "RT",
                OpMove::Width => "WIDTH",
            };
            Node::branch(
                "move_instruction",
                vec![Node::leaf("MOVEMENT", op), expr_tree(&move_.value.0)],
            )
        }
        Stmt::Pen(op) => {
            let op = match op {
                OpPen::Up => "PU",
                OpPen::Down => "PD",
            };
            Node::leaf("PEN", op)
        }
    }
}

fn expr_tree(expr: &Expr) -> Node {
    match expr {
        Expr::Number(text) => Node::leaf("INTNUM", text),
        Expr::Var(name) => Node::leaf("NAME", name),
    }
}

fn range_tree(range: &RangeArgs) -> Node {
    let bounds = match range {
        RangeArgs::Stop(stop) => vec![stop],
        RangeArgs::StartStop(start, stop) => vec![start, stop],
        RangeArgs::StartStopStep(start, stop, step) => vec![start, stop, step],
    };
    let bounds = bounds.into_iter().map(|bound| Node::leaf("INTNUM", bound)).collect();
    Node::branch("range_args", bounds)
}

fn bool_tree(expr: &BoolExpr) -> Node {
    match expr {
        BoolExpr::Compare(compare) => Node::branch(
            "comparison",
            vec![
                Node::leaf("INTNUM", &compare.lt),
                Node::leaf("COMPARATOR", compare.op.as_str()),
                Node::leaf("INTNUM", &compare.rt),
            ],
        ),
        BoolExpr::Not(inner) => Node::branch("not", vec![bool_tree(inner)]),
        BoolExpr::Infix(infix) => {
            let op = match infix.op {
                OpLogic::And => "and",
                OpLogic::Or => "or",
            };
            Node::branch(op, vec![bool_tree(&infix.lt), bool_tree(&infix.rt)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn pretty_tree() {
        let program = crate::parse("def dash(n) { PD FD n }\nif (!1 > 2) { dash(5) }").unwrap();
        let exp = r#"program
  function_def
    NAME "dash"
    params
      NAME "n"
    block
      PEN "PD"
      move_instruction
        MOVEMENT "FD"
        NAME "n"
  conditional
    not
      comparison
        INTNUM "1"
        COMPARATOR ">"
        INTNUM "2"
    block
      function_call
        NAME "dash"
        args
          INTNUM "5"
"#;
        assert_eq!(exp, pretty(&program));
    }

    #[test]
    fn dot_graph() {
        let program = crate::parse("for i in range(3) { PU }").unwrap();
        let exp = r#"digraph program {
    rankdir=TD;
    n0 [label="program"];
    n1 [label="single_for"];
    n2 [label="VAR \"i\""];
    n1 -> n2;
    n3 [label="range_args"];
    n4 [label="INTNUM \"3\""];
    n3 -> n4;
    n1 -> n3;
    n5 [label="block"];
    n6 [label="PEN \"PU\""];
    n5 -> n6;
    n1 -> n5;
    n0 -> n1;
}
"#;
        assert_eq!(exp, dot(&program));
    }
}
