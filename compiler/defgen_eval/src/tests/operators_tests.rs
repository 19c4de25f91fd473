#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use defgen_ir::BinaryOp;

use crate::{evaluate_binary, EvalErrorKind, Value, ValueKind};

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn s(text: &str) -> Value {
    Value::string(text)
}

fn err(left: Value, right: Value, op: BinaryOp) -> EvalErrorKind {
    evaluate_binary(left, right, op).unwrap_err().kind
}

mod arithmetic {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn basic() {
        assert_eq!(evaluate_binary(int(2), int(3), BinaryOp::Add).unwrap(), int(5));
        assert_eq!(evaluate_binary(int(2), int(3), BinaryOp::Sub).unwrap(), int(-1));
        assert_eq!(evaluate_binary(int(6), int(7), BinaryOp::Mul).unwrap(), int(42));
        assert_eq!(evaluate_binary(int(7), int(2), BinaryOp::Div).unwrap(), int(3));
        assert_eq!(evaluate_binary(int(7), int(2), BinaryOp::Mod).unwrap(), int(1));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(evaluate_binary(int(-7), int(2), BinaryOp::Div).unwrap(), int(-3));
        assert_eq!(evaluate_binary(int(-7), int(2), BinaryOp::Mod).unwrap(), int(-1));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(err(int(1), int(0), BinaryOp::Div), EvalErrorKind::DivisionByZero);
        assert_eq!(err(int(1), int(0), BinaryOp::Mod), EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn overflow() {
        assert_eq!(
            err(int(i64::MAX), int(1), BinaryOp::Add),
            EvalErrorKind::IntegerOverflow { operation: "addition" }
        );
        assert_eq!(
            err(int(i64::MIN), int(1), BinaryOp::Sub),
            EvalErrorKind::IntegerOverflow { operation: "subtraction" }
        );
        assert_eq!(
            err(int(i64::MAX), int(2), BinaryOp::Mul),
            EvalErrorKind::IntegerOverflow { operation: "multiplication" }
        );
        assert_eq!(
            err(int(i64::MIN), int(-1), BinaryOp::Div),
            EvalErrorKind::IntegerOverflow { operation: "division" }
        );
    }

    #[test]
    fn text_operand_is_a_type_mismatch() {
        assert_eq!(
            err(s("x"), int(1), BinaryOp::Add),
            EvalErrorKind::TypeMismatch { op: "+", kind: ValueKind::Str }
        );
        assert_eq!(
            err(int(1), s("x"), BinaryOp::Div),
            EvalErrorKind::TypeMismatch { op: "/", kind: ValueKind::Str }
        );
        assert_eq!(
            err(s("a"), s("b"), BinaryOp::Sub),
            EvalErrorKind::TypeMismatch { op: "-", kind: ValueKind::Str }
        );
    }
}

mod bitwise {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn and_or_xor() {
        assert_eq!(evaluate_binary(int(0b1100), int(0b1010), BinaryOp::BitAnd).unwrap(), int(0b1000));
        assert_eq!(evaluate_binary(int(0b1100), int(0b1010), BinaryOp::BitOr).unwrap(), int(0b1110));
        assert_eq!(evaluate_binary(int(0b1100), int(0b1010), BinaryOp::BitXor).unwrap(), int(0b0110));
    }

    #[test]
    fn shifts() {
        assert_eq!(evaluate_binary(int(1), int(4), BinaryOp::Shl).unwrap(), int(16));
        assert_eq!(evaluate_binary(int(256), int(4), BinaryOp::Shr).unwrap(), int(16));
        assert_eq!(evaluate_binary(int(1), int(63), BinaryOp::Shl).unwrap(), int(i64::MIN));
    }

    #[test]
    fn right_shift_is_arithmetic() {
        assert_eq!(evaluate_binary(int(-16), int(2), BinaryOp::Shr).unwrap(), int(-4));
    }

    #[test]
    fn shift_amount_out_of_range() {
        assert_eq!(err(int(1), int(64), BinaryOp::Shl), EvalErrorKind::InvalidShift { amount: 64 });
        assert_eq!(err(int(1), int(-1), BinaryOp::Shr), EvalErrorKind::InvalidShift { amount: -1 });
    }

    #[test]
    fn bitwise_on_text() {
        assert_eq!(
            err(s("x"), int(1), BinaryOp::BitAnd),
            EvalErrorKind::TypeMismatch { op: "&", kind: ValueKind::Str }
        );
    }
}

mod comparison {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integers_yield_one_or_zero() {
        assert_eq!(evaluate_binary(int(3), int(3), BinaryOp::Eq).unwrap(), int(1));
        assert_eq!(evaluate_binary(int(3), int(4), BinaryOp::Eq).unwrap(), int(0));
        assert_eq!(evaluate_binary(int(3), int(4), BinaryOp::NotEq).unwrap(), int(1));
        assert_eq!(evaluate_binary(int(3), int(4), BinaryOp::Lt).unwrap(), int(1));
        assert_eq!(evaluate_binary(int(4), int(4), BinaryOp::LtEq).unwrap(), int(1));
        assert_eq!(evaluate_binary(int(3), int(4), BinaryOp::Gt).unwrap(), int(0));
        assert_eq!(evaluate_binary(int(-1), int(-1), BinaryOp::GtEq).unwrap(), int(1));
    }

    #[test]
    fn strings_compare_bytewise() {
        assert_eq!(evaluate_binary(s("abc"), s("abc"), BinaryOp::Eq).unwrap(), int(1));
        assert_eq!(evaluate_binary(s("B"), s("a"), BinaryOp::Lt).unwrap(), int(1));
        assert_eq!(evaluate_binary(s("ab"), s("abc"), BinaryOp::GtEq).unwrap(), int(0));
    }

    #[test]
    fn mixed_kinds_name_the_right_operand() {
        assert_eq!(
            err(int(1), s("1"), BinaryOp::Eq),
            EvalErrorKind::TypeMismatch { op: "==", kind: ValueKind::Str }
        );
        assert_eq!(
            err(s("1"), int(1), BinaryOp::Lt),
            EvalErrorKind::TypeMismatch { op: "<", kind: ValueKind::Int }
        );
    }
}

mod logical {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn truth_table() {
        assert_eq!(evaluate_binary(int(2), int(-1), BinaryOp::And).unwrap(), int(1));
        assert_eq!(evaluate_binary(int(2), int(0), BinaryOp::And).unwrap(), int(0));
        assert_eq!(evaluate_binary(int(0), int(0), BinaryOp::Or).unwrap(), int(0));
        assert_eq!(evaluate_binary(int(0), int(5), BinaryOp::Or).unwrap(), int(1));
    }

    #[test]
    fn text_is_not_truthy() {
        assert_eq!(
            err(int(1), s(""), BinaryOp::Or),
            EvalErrorKind::TypeMismatch { op: "||", kind: ValueKind::Str }
        );
    }
}

mod concat {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mixes_integers_and_strings() {
        assert_eq!(evaluate_binary(s("core_"), int(32), BinaryOp::Concat).unwrap(), s("core_32"));
        assert_eq!(evaluate_binary(int(-4), s("k"), BinaryOp::Concat).unwrap(), s("-4k"));
        assert_eq!(evaluate_binary(int(1), int(2), BinaryOp::Concat).unwrap(), s("12"));
        assert_eq!(evaluate_binary(s(""), s(""), BinaryOp::Concat).unwrap(), s(""));
    }
}
