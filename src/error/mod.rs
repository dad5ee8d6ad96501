//! Error types for the compilation pipeline.

use crate::span::Span;
use thiserror::Error;

/// Compile-phase errors.
///
/// Lexical problems (unterminated strings, ill-formed prefix marks) reach
/// the compiler as ERROR tokens and surface here; no partial chunk is
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Lexical error near '{lexeme}' at {span}")]
    Lexical { lexeme: String, span: Span },

    #[error("Invalid number literal '{literal}' at {span}")]
    InvalidNumber { literal: String, span: Span },
}

impl CompileError {
    pub fn lexical(lexeme: impl Into<String>, span: Span) -> Self {
        Self::Lexical {
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn invalid_number(literal: impl Into<String>, span: Span) -> Self {
        Self::InvalidNumber {
            literal: literal.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Lexical { span, .. } => *span,
            Self::InvalidNumber { span, .. } => *span,
        }
    }
}

/// Runtime errors.
///
/// The instruction-dispatch loop is not part of this crate; this kind
/// exists so the top-level result distinguishes "could not compile" from
/// "compiled but failed to run" once an execution phase consumes chunks.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{message} at {span}")]
    General { message: String, span: Span },
}

impl RuntimeError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self::General {
            message: message.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::General { span, .. } => *span,
        }
    }
}

/// A unified error type for all phases.
#[derive(Debug, Error)]
pub enum RillError {
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
