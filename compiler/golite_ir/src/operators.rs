//! Binary and Unary Operators
//!
//! Every operator a GoLite expression can lower to a runtime call for.
//!
//! The fixed-width variants (`AddInt`, `SubInt`, `MulInt`, `DivInt`) are
//! chosen by the type checker for integer-typed operands; the unsuffixed
//! arithmetic variants keep unrestricted double semantics.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Logical (short-circuit, lowered to control flow)
    Or,
    And,

    // Comparison
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Bitwise
    BwOr,
    BwXor,
    BwAnd,
    BwAndNot,
    LShift,
    RShift,

    // Fixed-width integer arithmetic
    AddInt,
    SubInt,
    MulInt,
    DivInt,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOp; 23] = [
        Self::Or,
        Self::And,
        Self::Eq,
        Self::Neq,
        Self::Lt,
        Self::Leq,
        Self::Gt,
        Self::Geq,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::BwOr,
        Self::BwXor,
        Self::BwAnd,
        Self::BwAndNot,
        Self::LShift,
        Self::RShift,
        Self::AddInt,
        Self::SubInt,
        Self::MulInt,
        Self::DivInt,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in diagnostics to show the operator that failed. Fixed-width
    /// variants share the symbol of their unrestricted counterpart.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Leq => "<=",
            Self::Gt => ">",
            Self::Geq => ">=",
            Self::Add | Self::AddInt => "+",
            Self::Sub | Self::SubInt => "-",
            Self::Mul | Self::MulInt => "*",
            Self::Div | Self::DivInt => "/",
            Self::Mod => "%",
            Self::BwOr => "|",
            Self::BwXor => "^",
            Self::BwAnd => "&",
            Self::BwAndNot => "&^",
            Self::LShift => "<<",
            Self::RShift => ">>",
        }
    }

    /// Name of the runtime entry point generated code calls for this operator.
    pub const fn entry_name(self) -> &'static str {
        match self {
            Self::Or => "binary_Or",
            Self::And => "binary_And",
            Self::Eq => "binary_Eq",
            Self::Neq => "binary_Neq",
            Self::Lt => "binary_Lt",
            Self::Leq => "binary_Leq",
            Self::Gt => "binary_Gt",
            Self::Geq => "binary_Geq",
            Self::Add => "binary_Add",
            Self::Sub => "binary_Sub",
            Self::Mul => "binary_Mul",
            Self::Div => "binary_Div",
            Self::Mod => "binary_Mod",
            Self::BwOr => "binary_BwOr",
            Self::BwXor => "binary_BwXor",
            Self::BwAnd => "binary_BwAnd",
            Self::BwAndNot => "binary_BwAndNot",
            Self::LShift => "binary_LShift",
            Self::RShift => "binary_RShift",
            Self::AddInt => "binary_Add_int",
            Self::SubInt => "binary_Sub_int",
            Self::MulInt => "binary_Mul_int",
            Self::DivInt => "binary_Div_int",
        }
    }

    /// Look up an operator by its runtime entry name.
    pub fn from_entry_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.entry_name() == name)
    }

    /// `||` and `&&` never reach the runtime; the generator lowers them to branches.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::Or | Self::And)
    }

    /// Operators producing a boolean.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Neq | Self::Lt | Self::Leq | Self::Gt | Self::Geq
        )
    }

    /// Operators whose result wraps at 32 bits.
    pub const fn is_fixed_width(self) -> bool {
        matches!(
            self,
            Self::AddInt
                | Self::SubInt
                | Self::MulInt
                | Self::DivInt
                | Self::Mod
                | Self::BwOr
                | Self::BwXor
                | Self::BwAnd
                | Self::BwAndNot
                | Self::LShift
                | Self::RShift
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Plus,
    Neg,
    BwCompl,
    Not,
}

impl UnaryOp {
    /// Every unary operator, in declaration order.
    pub const ALL: [UnaryOp; 4] = [Self::Plus, Self::Neg, Self::BwCompl, Self::Not];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::BwCompl => "^",
            Self::Not => "!",
        }
    }

    /// Name of the runtime entry point generated code calls for this operator.
    pub const fn entry_name(self) -> &'static str {
        match self {
            Self::Plus => "unary_Plus",
            Self::Neg => "unary_Neg",
            Self::BwCompl => "unary_BwCompl",
            Self::Not => "unary_Not",
        }
    }

    /// Look up an operator by its runtime entry name.
    pub fn from_entry_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.entry_name() == name)
    }
}

#[cfg(test)]
mod tests;
