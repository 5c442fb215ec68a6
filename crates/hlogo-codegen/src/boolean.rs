use hlogo_syntax::ast::{BoolExpr, OpLogic};

/// Lowers a condition to a Python boolean expression. Every `and`/`or` is
/// wrapped in parentheses and every `not` parenthesizes its operand, so the
/// grouping of the output always matches the shape of the tree.
pub fn translate_bool(expr: &BoolExpr) -> String {
    match expr {
        BoolExpr::Compare(compare) => {
            format!("{} {} {}", compare.lt, compare.op.as_str(), compare.rt)
        }
        BoolExpr::Not(inner) => format!("not ({})", translate_bool(inner)),
        BoolExpr::Infix(infix) => {
            let op = match infix.op {
                OpLogic::And => "and",
                OpLogic::Or => "or",
            };
            format!("({} {} {})", translate_bool(&infix.lt), op, translate_bool(&infix.rt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hlogo_syntax::ast::{BoolCompare, BoolInfix, OpCompare};

    use pretty_assertions::assert_eq;

    fn compare(lt: &str, op: OpCompare, rt: &str) -> BoolExpr {
        BoolExpr::Compare(BoolCompare { lt: lt.to_string(), op, rt: rt.to_string() })
    }

    fn infix(lt: BoolExpr, op: OpLogic, rt: BoolExpr) -> BoolExpr {
        BoolExpr::Infix(Box::new(BoolInfix { lt, op, rt }))
    }

    fn not(inner: BoolExpr) -> BoolExpr {
        BoolExpr::Not(Box::new(inner))
    }

    #[test]
    fn translate_comparators() {
        for (op, exp) in [
            (OpCompare::Equal, "1 == 2"),
            (OpCompare::NotEqual, "1 != 2"),
            (OpCompare::Greater, "1 > 2"),
            (OpCompare::GreaterEqual, "1 >= 2"),
            (OpCompare::Less, "1 < 2"),
            (OpCompare::LessEqual, "1 <= 2"),
        ] {
            assert_eq!(translate_bool(&compare("1", op, "2")), exp);
        }
    }

    #[test]
    fn translate_double_negation() {
        let expr = not(not(compare("3", OpCompare::Less, "4")));
        assert_eq!(translate_bool(&expr), "not (not (3 < 4))");
    }

    #[test]
    fn translate_keeps_tree_shape() {
        let a = || compare("1", OpCompare::Less, "2");
        let b = || compare("2", OpCompare::Less, "3");
        let c = || compare("3", OpCompare::Less, "4");

        let left = infix(infix(a(), OpLogic::Or, b()), OpLogic::And, c());
        assert_eq!(translate_bool(&left), "((1 < 2 or 2 < 3) and 3 < 4)");

        let right = infix(a(), OpLogic::Or, infix(b(), OpLogic::And, c()));
        assert_eq!(translate_bool(&right), "(1 < 2 or (2 < 3 and 3 < 4))");
    }

    #[test]
    fn translate_not_of_infix() {
        let expr = not(infix(
            compare("1", OpCompare::Equal, "1"),
            OpLogic::And,
            compare("-2.5", OpCompare::GreaterEqual, "1e3"),
        ));
        assert_eq!(translate_bool(&expr), "not ((1 == 1 and -2.5 >= 1e3))");
    }
}
