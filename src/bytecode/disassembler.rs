//! Human-readable chunk dumps for diagnostics.

use std::fmt::Write;

use crate::bytecode::chunk::Chunk;
use crate::bytecode::instruction::OpCode;
use crate::runtime::value::print_value;

/// Disassemble a whole chunk under a heading.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut output = String::new();
    writeln!(&mut output, "== {} ==", name).unwrap();
    let mut offset = 0;
    while offset < chunk.code.len() {
        offset = disassemble_instruction(chunk, offset, &mut output);
    }
    output
}

/// Disassemble the instruction at `offset`; returns the next offset.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize, output: &mut String) -> usize {
    write!(output, "{:04} ", offset).unwrap();

    // Line number, or | when unchanged from the previous instruction.
    let line = chunk.line_for_offset(offset);
    if offset > 0 && line == chunk.line_for_offset(offset - 1) {
        write!(output, "   | ").unwrap();
    } else {
        write!(output, "{:4} ", line).unwrap();
    }

    let byte = chunk.code[offset];
    let Some(opcode) = OpCode::from_u8(byte) else {
        writeln!(output, "Unknown opcode {}", byte).unwrap();
        return offset + 1;
    };

    match opcode {
        OpCode::Return => {
            writeln!(output, "{:?}", opcode).unwrap();
            offset + 1
        }
        OpCode::Constant => {
            let index = chunk.code[offset + 1] as usize;
            writeln!(
                output,
                "{:?} {} ({})",
                opcode,
                index,
                print_value(&chunk.constants[index])
            )
            .unwrap();
            offset + 2
        }
        OpCode::ConstantLong => {
            let index = chunk.read_u24(offset + 1);
            writeln!(
                output,
                "{:?} {} ({})",
                opcode,
                index,
                print_value(&chunk.constants[index])
            )
            .unwrap();
            offset + 4
        }
    }
}

/// Print a disassembly to stdout.
pub fn print_disassembly(chunk: &Chunk, name: &str) {
    print!("{}", disassemble_chunk(chunk, name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::value::Value;

    #[test]
    fn test_disassemble_constants_and_return() {
        let mut chunk = Chunk::new();
        chunk.write_constant(Value::number(1.0), 0);
        chunk.write_constant(Value::number(2.5), 0);
        chunk.write_op(OpCode::Return, 1);
        let output = disassemble_chunk(&chunk, "script");
        assert!(output.starts_with("== script ==\n"));
        assert!(output.contains("Constant 0 (1)"));
        assert!(output.contains("Constant 1 (2.5)"));
        assert!(output.contains("Return"));
    }

    #[test]
    fn test_repeated_line_prints_pipe() {
        let mut chunk = Chunk::new();
        chunk.write_constant(Value::number(1.0), 0);
        chunk.write_constant(Value::number(2.0), 0);
        let output = disassemble_chunk(&chunk, "s");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].contains("   0 "));
        assert!(lines[2].contains("   | "));
    }

    #[test]
    fn test_unknown_opcode_is_reported() {
        let mut chunk = Chunk::new();
        chunk.write_byte(9, 0);
        let output = disassemble_chunk(&chunk, "bad");
        assert!(output.contains("Unknown opcode 9"));
    }
}
