//! Rill: the front-end and bytecode substrate of a small Lisp.
//!
//! Source bytes are decoded into code points, scanned into positioned
//! tokens, and compiled into a chunk: a bytecode stream, a constant pool,
//! and a run-length line table. The instruction-dispatch loop that will
//! execute chunks lives outside this crate.
//!
//! # Architecture
//!
//! - `unicode`: hand-rolled UTF-8 codec and keyword case folding
//! - `hash`: MurmurHash3 (x86, 128-bit) string digests
//! - `lexer`: keyword trie and the code-point scanner
//! - `runtime`: tagged values, heap objects, and the symbol table
//! - `bytecode`: chunks, the literal compiler, and the disassembler

pub mod bytecode;
pub mod error;
pub mod hash;
pub mod lexer;
pub mod runtime;
pub mod span;
pub mod unicode;

use std::path::Path;

use error::RillError;

/// Decode UTF-8 source bytes and compile them into a chunk.
pub fn compile(source: &[u8]) -> Result<bytecode::Chunk, RillError> {
    let codepoints = unicode::to_codepoints(source, source.len());
    let chunk = bytecode::Compiler::new(&codepoints).compile()?;
    Ok(chunk)
}

/// Compile source held in a string.
pub fn compile_str(source: &str) -> Result<bytecode::Chunk, RillError> {
    compile(source.as_bytes())
}

/// Read and compile a file. Read failures surface as the IO error kind:
/// compilation never starts.
pub fn compile_file(path: &Path) -> Result<bytecode::Chunk, RillError> {
    let bytes = std::fs::read(path)?;
    compile(&bytes)
}
