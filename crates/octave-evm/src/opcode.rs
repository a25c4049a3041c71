//! Opcode byte values and mnemonics (Yellow Paper Appendix H)

use std::fmt;

/// A single instruction byte
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(pub u8);

#[allow(missing_docs)]
impl Opcode {
    pub const STOP: Opcode = Opcode(0x00);
    pub const ADD: Opcode = Opcode(0x01);
    pub const MUL: Opcode = Opcode(0x02);
    pub const SUB: Opcode = Opcode(0x03);
    pub const DIV: Opcode = Opcode(0x04);
    pub const SDIV: Opcode = Opcode(0x05);
    pub const MOD: Opcode = Opcode(0x06);
    pub const SMOD: Opcode = Opcode(0x07);
    pub const ADDMOD: Opcode = Opcode(0x08);
    pub const MULMOD: Opcode = Opcode(0x09);
    pub const EXP: Opcode = Opcode(0x0A);
    pub const SIGNEXTEND: Opcode = Opcode(0x0B);

    pub const LT: Opcode = Opcode(0x10);
    pub const GT: Opcode = Opcode(0x11);
    pub const SLT: Opcode = Opcode(0x12);
    pub const SGT: Opcode = Opcode(0x13);
    pub const EQ: Opcode = Opcode(0x14);
    pub const ISZERO: Opcode = Opcode(0x15);
    pub const AND: Opcode = Opcode(0x16);
    pub const OR: Opcode = Opcode(0x17);
    pub const XOR: Opcode = Opcode(0x18);
    pub const NOT: Opcode = Opcode(0x19);
    pub const BYTE: Opcode = Opcode(0x1A);
    pub const SHL: Opcode = Opcode(0x1B);
    pub const SHR: Opcode = Opcode(0x1C);
    pub const SAR: Opcode = Opcode(0x1D);

    pub const KECCAK256: Opcode = Opcode(0x20);

    pub const ADDRESS: Opcode = Opcode(0x30);
    pub const BALANCE: Opcode = Opcode(0x31);
    pub const ORIGIN: Opcode = Opcode(0x32);
    pub const CALLER: Opcode = Opcode(0x33);
    pub const CALLVALUE: Opcode = Opcode(0x34);
    pub const CALLDATALOAD: Opcode = Opcode(0x35);
    pub const CALLDATASIZE: Opcode = Opcode(0x36);
    pub const CALLDATACOPY: Opcode = Opcode(0x37);
    pub const CODESIZE: Opcode = Opcode(0x38);
    pub const CODECOPY: Opcode = Opcode(0x39);
    pub const GASPRICE: Opcode = Opcode(0x3A);
    pub const EXTCODESIZE: Opcode = Opcode(0x3B);
    pub const EXTCODECOPY: Opcode = Opcode(0x3C);
    pub const RETURNDATASIZE: Opcode = Opcode(0x3D);
    pub const RETURNDATACOPY: Opcode = Opcode(0x3E);
    pub const EXTCODEHASH: Opcode = Opcode(0x3F);

    pub const BLOCKHASH: Opcode = Opcode(0x40);
    pub const COINBASE: Opcode = Opcode(0x41);
    pub const TIMESTAMP: Opcode = Opcode(0x42);
    pub const NUMBER: Opcode = Opcode(0x43);
    pub const PREVRANDAO: Opcode = Opcode(0x44);
    pub const GASLIMIT: Opcode = Opcode(0x45);
    pub const CHAINID: Opcode = Opcode(0x46);
    pub const SELFBALANCE: Opcode = Opcode(0x47);
    pub const BASEFEE: Opcode = Opcode(0x48);

    pub const POP: Opcode = Opcode(0x50);
    pub const MLOAD: Opcode = Opcode(0x51);
    pub const MSTORE: Opcode = Opcode(0x52);
    pub const MSTORE8: Opcode = Opcode(0x53);
    pub const SLOAD: Opcode = Opcode(0x54);
    pub const SSTORE: Opcode = Opcode(0x55);
    pub const JUMP: Opcode = Opcode(0x56);
    pub const JUMPI: Opcode = Opcode(0x57);
    pub const PC: Opcode = Opcode(0x58);
    pub const MSIZE: Opcode = Opcode(0x59);
    pub const GAS: Opcode = Opcode(0x5A);
    pub const JUMPDEST: Opcode = Opcode(0x5B);
    pub const PUSH0: Opcode = Opcode(0x5F);
    pub const PUSH1: Opcode = Opcode(0x60);
    pub const PUSH32: Opcode = Opcode(0x7F);
    pub const DUP1: Opcode = Opcode(0x80);
    pub const DUP16: Opcode = Opcode(0x8F);
    pub const SWAP1: Opcode = Opcode(0x90);
    pub const SWAP16: Opcode = Opcode(0x9F);
    pub const LOG0: Opcode = Opcode(0xA0);
    pub const LOG4: Opcode = Opcode(0xA4);

    pub const CREATE: Opcode = Opcode(0xF0);
    pub const CALL: Opcode = Opcode(0xF1);
    pub const CALLCODE: Opcode = Opcode(0xF2);
    pub const RETURN: Opcode = Opcode(0xF3);
    pub const DELEGATECALL: Opcode = Opcode(0xF4);
    pub const CREATE2: Opcode = Opcode(0xF5);
    pub const STATICCALL: Opcode = Opcode(0xFA);
    pub const REVERT: Opcode = Opcode(0xFD);
    pub const INVALID: Opcode = Opcode(0xFE);
    pub const SELFDESTRUCT: Opcode = Opcode(0xFF);
}

impl Opcode {
    /// Raw byte
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// Number of immediate bytes following a PUSH (0 for PUSH0 and non-push)
    pub const fn push_size(self) -> usize {
        if self.0 >= Self::PUSH1.0 && self.0 <= Self::PUSH32.0 {
            (self.0 - Self::PUSH0.0) as usize
        } else {
            0
        }
    }

    /// Whether this is PUSH0..PUSH32
    pub const fn is_push(self) -> bool {
        self.0 >= Self::PUSH0.0 && self.0 <= Self::PUSH32.0
    }

    /// DUP depth, 1 for DUP1
    pub const fn dup_depth(self) -> Option<usize> {
        if self.0 >= Self::DUP1.0 && self.0 <= Self::DUP16.0 {
            Some((self.0 - Self::DUP1.0) as usize + 1)
        } else {
            None
        }
    }

    /// SWAP depth, 1 for SWAP1
    pub const fn swap_depth(self) -> Option<usize> {
        if self.0 >= Self::SWAP1.0 && self.0 <= Self::SWAP16.0 {
            Some((self.0 - Self::SWAP1.0) as usize + 1)
        } else {
            None
        }
    }

    /// Mnemonic, `None` for unassigned bytes
    pub fn name(self) -> Option<&'static str> {
        NAMES[self.0 as usize]
    }
}

impl From<u8> for Opcode {
    fn from(byte: u8) -> Self {
        Opcode(byte)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02x}", self.0),
        }
    }
}

static NAMES: [Option<&str>; 256] = {
    let mut names: [Option<&str>; 256] = [None; 256];
    names[0x00] = Some("STOP");
    names[0x01] = Some("ADD");
    names[0x02] = Some("MUL");
    names[0x03] = Some("SUB");
    names[0x04] = Some("DIV");
    names[0x05] = Some("SDIV");
    names[0x06] = Some("MOD");
    names[0x07] = Some("SMOD");
    names[0x08] = Some("ADDMOD");
    names[0x09] = Some("MULMOD");
    names[0x0A] = Some("EXP");
    names[0x0B] = Some("SIGNEXTEND");
    names[0x10] = Some("LT");
    names[0x11] = Some("GT");
    names[0x12] = Some("SLT");
    names[0x13] = Some("SGT");
    names[0x14] = Some("EQ");
    names[0x15] = Some("ISZERO");
    names[0x16] = Some("AND");
    names[0x17] = Some("OR");
    names[0x18] = Some("XOR");
    names[0x19] = Some("NOT");
    names[0x1A] = Some("BYTE");
    names[0x1B] = Some("SHL");
    names[0x1C] = Some("SHR");
    names[0x1D] = Some("SAR");
    names[0x20] = Some("KECCAK256");
    names[0x30] = Some("ADDRESS");
    names[0x31] = Some("BALANCE");
    names[0x32] = Some("ORIGIN");
    names[0x33] = Some("CALLER");
    names[0x34] = Some("CALLVALUE");
    names[0x35] = Some("CALLDATALOAD");
    names[0x36] = Some("CALLDATASIZE");
    names[0x37] = Some("CALLDATACOPY");
    names[0x38] = Some("CODESIZE");
    names[0x39] = Some("CODECOPY");
    names[0x3A] = Some("GASPRICE");
    names[0x3B] = Some("EXTCODESIZE");
    names[0x3C] = Some("EXTCODECOPY");
    names[0x3D] = Some("RETURNDATASIZE");
    names[0x3E] = Some("RETURNDATACOPY");
    names[0x3F] = Some("EXTCODEHASH");
    names[0x40] = Some("BLOCKHASH");
    names[0x41] = Some("COINBASE");
    names[0x42] = Some("TIMESTAMP");
    names[0x43] = Some("NUMBER");
    names[0x44] = Some("PREVRANDAO");
    names[0x45] = Some("GASLIMIT");
    names[0x46] = Some("CHAINID");
    names[0x47] = Some("SELFBALANCE");
    names[0x48] = Some("BASEFEE");
    names[0x50] = Some("POP");
    names[0x51] = Some("MLOAD");
    names[0x52] = Some("MSTORE");
    names[0x53] = Some("MSTORE8");
    names[0x54] = Some("SLOAD");
    names[0x55] = Some("SSTORE");
    names[0x56] = Some("JUMP");
    names[0x57] = Some("JUMPI");
    names[0x58] = Some("PC");
    names[0x59] = Some("MSIZE");
    names[0x5A] = Some("GAS");
    names[0x5B] = Some("JUMPDEST");
    names[0x5F] = Some("PUSH0");

    const PUSH: [&str; 32] = [
        "PUSH1", "PUSH2", "PUSH3", "PUSH4", "PUSH5", "PUSH6", "PUSH7", "PUSH8", "PUSH9",
        "PUSH10", "PUSH11", "PUSH12", "PUSH13", "PUSH14", "PUSH15", "PUSH16", "PUSH17",
        "PUSH18", "PUSH19", "PUSH20", "PUSH21", "PUSH22", "PUSH23", "PUSH24", "PUSH25",
        "PUSH26", "PUSH27", "PUSH28", "PUSH29", "PUSH30", "PUSH31", "PUSH32",
    ];
    const DUP: [&str; 16] = [
        "DUP1", "DUP2", "DUP3", "DUP4", "DUP5", "DUP6", "DUP7", "DUP8", "DUP9", "DUP10",
        "DUP11", "DUP12", "DUP13", "DUP14", "DUP15", "DUP16",
    ];
    const SWAP: [&str; 16] = [
        "SWAP1", "SWAP2", "SWAP3", "SWAP4", "SWAP5", "SWAP6", "SWAP7", "SWAP8", "SWAP9",
        "SWAP10", "SWAP11", "SWAP12", "SWAP13", "SWAP14", "SWAP15", "SWAP16",
    ];
    const LOG: [&str; 5] = ["LOG0", "LOG1", "LOG2", "LOG3", "LOG4"];

    let mut i = 0;
    while i < 32 {
        names[0x60 + i] = Some(PUSH[i]);
        i += 1;
    }
    i = 0;
    while i < 16 {
        names[0x80 + i] = Some(DUP[i]);
        names[0x90 + i] = Some(SWAP[i]);
        i += 1;
    }
    i = 0;
    while i < 5 {
        names[0xA0 + i] = Some(LOG[i]);
        i += 1;
    }

    names[0xF0] = Some("CREATE");
    names[0xF1] = Some("CALL");
    names[0xF2] = Some("CALLCODE");
    names[0xF3] = Some("RETURN");
    names[0xF4] = Some("DELEGATECALL");
    names[0xF5] = Some("CREATE2");
    names[0xFA] = Some("STATICCALL");
    names[0xFD] = Some("REVERT");
    names[0xFE] = Some("INVALID");
    names[0xFF] = Some("SELFDESTRUCT");
    names
};
