//! Single-pass compiler: token stream in, bytecode chunk out.
//!
//! Literal constants are the only forms compiled so far. Atoms,
//! primitives, and structure tokens are classified by the scanner but
//! emit nothing; the evaluation strategy for them belongs to the
//! execution phase.

use crate::bytecode::chunk::Chunk;
use crate::bytecode::instruction::OpCode;
use crate::error::CompileError;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenKind;
use crate::runtime::value::Value;

/// Compiles one source buffer into one chunk.
pub struct Compiler<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Compiler<'a> {
    pub fn new(source: &'a [char]) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    /// Drive the scanner to EOF and emit bytecode.
    ///
    /// An ERROR token aborts immediately; no partial chunk escapes.
    pub fn compile(mut self) -> Result<Chunk, CompileError> {
        let mut chunk = Chunk::new();
        loop {
            let token = self.scanner.next_token();
            match token.kind {
                TokenKind::Eof => {
                    chunk.write_op(OpCode::Return, token.span.line);
                    return Ok(chunk);
                }
                TokenKind::Error => {
                    return Err(CompileError::lexical(
                        self.scanner.lexeme(&token),
                        token.span,
                    ));
                }
                TokenKind::Number => {
                    let literal = self.scanner.lexeme(&token);
                    let number: f64 = literal
                        .parse()
                        .map_err(|_| CompileError::invalid_number(literal.clone(), token.span))?;
                    chunk.write_constant(Value::number(number), token.span.line);
                }
                TokenKind::String => {
                    chunk.write_constant(
                        Value::string(token.text(self.scanner.source())),
                        token.span.line,
                    );
                }
                // Classified but not yet compiled.
                _ => {}
            }
        }
    }
}
