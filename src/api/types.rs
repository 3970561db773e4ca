use umwero_core::translit::{Token, TokenKind};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum UmweroError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("numeral error: {msg}")]
    Numeral { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct UmweroToken {
    pub input: String,
    pub output: String,
    pub kind: UmweroTokenKind,
    pub ambiguous: bool,
}

#[derive(Clone, Debug, uniffi::Record)]
pub struct UmweroCandidate {
    pub cluster: String,
    pub canonical: bool,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum UmweroTokenKind {
    Vowel,
    Ligature,
    Consonant,
    Numeral,
    Punctuation,
    Unmapped,
    Separator,
}

impl From<TokenKind> for UmweroTokenKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Vowel => Self::Vowel,
            TokenKind::Ligature => Self::Ligature,
            TokenKind::Consonant => Self::Consonant,
            TokenKind::Numeral => Self::Numeral,
            TokenKind::Punctuation => Self::Punctuation,
            TokenKind::Unmapped => Self::Unmapped,
            TokenKind::Separator => Self::Separator,
        }
    }
}

impl From<Token> for UmweroToken {
    fn from(t: Token) -> Self {
        Self {
            input: t.input,
            output: t.output,
            kind: t.kind.into(),
            ambiguous: t.ambiguous,
        }
    }
}
