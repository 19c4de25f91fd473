//! Binary and Unary Operators
//!
//! The operator set is closed: arithmetic, bitwise, comparison, logical and
//! string concatenation. Anything else is rejected by the parser.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // Text
    Concat,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            // Comparison
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
            // Bitwise
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            // Text
            Self::Concat => "#",
        }
    }

    /// Returns the precedence level of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    ///
    /// - 3: `*` `/` `%`
    /// - 4: `+` `-`
    /// - 5: `#`
    /// - 6: `<<` `>>`
    /// - 7: `<` `>` `<=` `>=`
    /// - 8: `==` `!=`
    /// - 9: `&`
    /// - 10: `^`
    /// - 11: `|`
    /// - 12: `&&`
    /// - 13: `||`
    pub const fn precedence(self) -> u8 {
        match self {
            // Multiplicative (highest binary precedence)
            Self::Mul | Self::Div | Self::Mod => 3,
            // Additive
            Self::Add | Self::Sub => 4,
            // Concatenation
            Self::Concat => 5,
            // Shift
            Self::Shl | Self::Shr => 6,
            // Comparison
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 7,
            // Equality
            Self::Eq | Self::NotEq => 8,
            // Bitwise AND
            Self::BitAnd => 9,
            // Bitwise XOR
            Self::BitXor => 10,
            // Bitwise OR
            Self::BitOr => 11,
            // Logical AND
            Self::And => 12,
            // Logical OR (lowest binary precedence)
            Self::Or => 13,
        }
    }

    /// Loosest precedence level any binary operator uses.
    pub const LOWEST_PRECEDENCE: u8 = 13;

    /// Equality and ordering operators. These accept two strings as well
    /// as two integers.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }
}
