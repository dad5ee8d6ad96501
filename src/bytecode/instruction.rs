//! Opcode definitions for the bytecode stream.

/// Opcodes understood by the stack machine.
///
/// The byte encoding is a fixed external interface: RETURN is 0, CONSTANT
/// is 1, CONSTANT_LONG is 2. The dispatch loop that will consume these
/// lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Return from the current unit. No operands.
    Return = 0,
    /// Load a constant: CONSTANT <index:u8>
    Constant = 1,
    /// Load a constant with a wide index: CONSTANT_LONG <index:u24, little-endian>
    ConstantLong = 2,
}

impl OpCode {
    /// Convert from a raw byte.
    pub fn from_u8(byte: u8) -> Option<OpCode> {
        match byte {
            0 => Some(OpCode::Return),
            1 => Some(OpCode::Constant),
            2 => Some(OpCode::ConstantLong),
            _ => None,
        }
    }

    /// Number of operand bytes following this opcode.
    pub fn operand_size(self) -> usize {
        match self {
            OpCode::Return => 0,
            OpCode::Constant => 1,
            OpCode::ConstantLong => 3,
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_encoding() {
        assert_eq!(OpCode::Return as u8, 0);
        assert_eq!(OpCode::Constant as u8, 1);
        assert_eq!(OpCode::ConstantLong as u8, 2);
    }

    #[test]
    fn test_roundtrip() {
        for byte in 0..=2 {
            let op = OpCode::from_u8(byte).expect("valid opcode");
            assert_eq!(byte, op as u8);
        }
        assert!(OpCode::from_u8(3).is_none());
        assert!(OpCode::from_u8(255).is_none());
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::Return.operand_size(), 0);
        assert_eq!(OpCode::Constant.operand_size(), 1);
        assert_eq!(OpCode::ConstantLong.operand_size(), 3);
    }
}
