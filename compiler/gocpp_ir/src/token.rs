//! Operator tokens of the source language.
//!
//! The Go operators that can appear in an expression, assignment or
//! increment statement. Keywords, delimiters and literal classes are not
//! represented: the tree carries them structurally.

use std::fmt;

/// An operator token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,

    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,

    // Compound assignment
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    AndNotAssign,

    // Logical
    LAnd,
    LOr,

    // Channel receive / send
    Arrow,

    // Increment / decrement
    Inc,
    Dec,

    // Comparison
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,

    // Assignment
    Assign,
    Define,

    // Unary
    Not,
}

impl Token {
    /// Every token, in declaration order.
    pub const ALL: [Token; 36] = [
        Token::Add,
        Token::Sub,
        Token::Mul,
        Token::Quo,
        Token::Rem,
        Token::And,
        Token::Or,
        Token::Xor,
        Token::Shl,
        Token::Shr,
        Token::AndNot,
        Token::AddAssign,
        Token::SubAssign,
        Token::MulAssign,
        Token::QuoAssign,
        Token::RemAssign,
        Token::AndAssign,
        Token::OrAssign,
        Token::XorAssign,
        Token::ShlAssign,
        Token::ShrAssign,
        Token::AndNotAssign,
        Token::LAnd,
        Token::LOr,
        Token::Arrow,
        Token::Inc,
        Token::Dec,
        Token::Eql,
        Token::Neq,
        Token::Lss,
        Token::Leq,
        Token::Gtr,
        Token::Geq,
        Token::Assign,
        Token::Define,
        Token::Not,
    ];

    /// The token's source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Quo => "/",
            Token::Rem => "%",
            Token::And => "&",
            Token::Or => "|",
            Token::Xor => "^",
            Token::Shl => "<<",
            Token::Shr => ">>",
            Token::AndNot => "&^",
            Token::AddAssign => "+=",
            Token::SubAssign => "-=",
            Token::MulAssign => "*=",
            Token::QuoAssign => "/=",
            Token::RemAssign => "%=",
            Token::AndAssign => "&=",
            Token::OrAssign => "|=",
            Token::XorAssign => "^=",
            Token::ShlAssign => "<<=",
            Token::ShrAssign => ">>=",
            Token::AndNotAssign => "&^=",
            Token::LAnd => "&&",
            Token::LOr => "||",
            Token::Arrow => "<-",
            Token::Inc => "++",
            Token::Dec => "--",
            Token::Eql => "==",
            Token::Neq => "!=",
            Token::Lss => "<",
            Token::Leq => "<=",
            Token::Gtr => ">",
            Token::Geq => ">=",
            Token::Assign => "=",
            Token::Define => ":=",
            Token::Not => "!",
        }
    }

    /// Look up a token by its source spelling.
    pub fn from_text(text: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|tok| tok.as_str() == text)
    }

    /// `=`, `:=` and the compound assignment operators.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Token::Assign
                | Token::Define
                | Token::AddAssign
                | Token::SubAssign
                | Token::MulAssign
                | Token::QuoAssign
                | Token::RemAssign
                | Token::AndAssign
                | Token::OrAssign
                | Token::XorAssign
                | Token::ShlAssign
                | Token::ShrAssign
                | Token::AndNotAssign
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
