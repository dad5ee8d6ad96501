//! Bytecode substrate for the rill stack machine.
//!
//! - `instruction`: opcode definitions and operand widths
//! - `chunk`: the bytecode container (byte stream, constant pool, line map)
//! - `compiler`: drives the scanner and emits constants into a chunk
//! - `disassembler`: human-readable chunk dumps for diagnostics

pub mod chunk;
pub mod compiler;
pub mod disassembler;
pub mod instruction;

pub use chunk::{Chunk, LineStart};
pub use compiler::Compiler;
pub use disassembler::{disassemble_chunk, print_disassembly};
pub use instruction::OpCode;
