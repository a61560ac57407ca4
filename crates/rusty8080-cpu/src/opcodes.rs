//! Opcode metadata for the 8080 instruction set.
//!
//! The table drives the disassembler and trace output. Mnemonics use the
//! Intel operand notation: `d8` an immediate byte, `d16` an immediate word,
//! `a16` an absolute address.

/// Opcode information structure.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    /// Instruction mnemonic (for disassembly)
    pub mnemonic: &'static str,
    /// Instruction length in bytes, opcode included (1-3)
    pub size: u8,
    /// Whether this byte is an undocumented alias that executes as NOP
    pub alias: bool,
}

const fn op(mnemonic: &'static str, size: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        size,
        alias: false,
    }
}

const fn alias() -> OpcodeInfo {
    OpcodeInfo {
        mnemonic: "NOP",
        size: 1,
        alias: true,
    }
}

/// Complete 256-entry opcode lookup table, indexed by opcode byte.
pub const OPCODE_TABLE: [OpcodeInfo; 256] = [
    op("NOP", 1),        // 0x00
    op("LXI B,d16", 3),  // 0x01
    op("STAX B", 1),     // 0x02
    op("INX B", 1),      // 0x03
    op("INR B", 1),      // 0x04
    op("DCR B", 1),      // 0x05
    op("MVI B,d8", 2),   // 0x06
    op("RLC", 1),        // 0x07
    alias(),             // 0x08
    op("DAD B", 1),      // 0x09
    op("LDAX B", 1),     // 0x0A
    op("DCX B", 1),      // 0x0B
    op("INR C", 1),      // 0x0C
    op("DCR C", 1),      // 0x0D
    op("MVI C,d8", 2),   // 0x0E
    op("RRC", 1),        // 0x0F
    alias(),             // 0x10
    op("LXI D,d16", 3),  // 0x11
    op("STAX D", 1),     // 0x12
    op("INX D", 1),      // 0x13
    op("INR D", 1),      // 0x14
    op("DCR D", 1),      // 0x15
    op("MVI D,d8", 2),   // 0x16
    op("RAL", 1),        // 0x17
    alias(),             // 0x18
    op("DAD D", 1),      // 0x19
    op("LDAX D", 1),     // 0x1A
    op("DCX D", 1),      // 0x1B
    op("INR E", 1),      // 0x1C
    op("DCR E", 1),      // 0x1D
    op("MVI E,d8", 2),   // 0x1E
    op("RAR", 1),        // 0x1F
    alias(),             // 0x20
    op("LXI H,d16", 3),  // 0x21
    op("SHLD a16", 3),   // 0x22
    op("INX H", 1),      // 0x23
    op("INR H", 1),      // 0x24
    op("DCR H", 1),      // 0x25
    op("MVI H,d8", 2),   // 0x26
    op("DAA", 1),        // 0x27
    alias(),             // 0x28
    op("DAD H", 1),      // 0x29
    op("LHLD a16", 3),   // 0x2A
    op("DCX H", 1),      // 0x2B
    op("INR L", 1),      // 0x2C
    op("DCR L", 1),      // 0x2D
    op("MVI L,d8", 2),   // 0x2E
    op("CMA", 1),        // 0x2F
    alias(),             // 0x30
    op("LXI SP,d16", 3), // 0x31
    op("STA a16", 3),    // 0x32
    op("INX SP", 1),     // 0x33
    op("INR M", 1),      // 0x34
    op("DCR M", 1),      // 0x35
    op("MVI M,d8", 2),   // 0x36
    op("STC", 1),        // 0x37
    alias(),             // 0x38
    op("DAD SP", 1),     // 0x39
    op("LDA a16", 3),    // 0x3A
    op("DCX SP", 1),     // 0x3B
    op("INR A", 1),      // 0x3C
    op("DCR A", 1),      // 0x3D
    op("MVI A,d8", 2),   // 0x3E
    op("CMC", 1),        // 0x3F
    op("MOV B,B", 1),    // 0x40
    op("MOV B,C", 1),    // 0x41
    op("MOV B,D", 1),    // 0x42
    op("MOV B,E", 1),    // 0x43
    op("MOV B,H", 1),    // 0x44
    op("MOV B,L", 1),    // 0x45
    op("MOV B,M", 1),    // 0x46
    op("MOV B,A", 1),    // 0x47
    op("MOV C,B", 1),    // 0x48
    op("MOV C,C", 1),    // 0x49
    op("MOV C,D", 1),    // 0x4A
    op("MOV C,E", 1),    // 0x4B
    op("MOV C,H", 1),    // 0x4C
    op("MOV C,L", 1),    // 0x4D
    op("MOV C,M", 1),    // 0x4E
    op("MOV C,A", 1),    // 0x4F
    op("MOV D,B", 1),    // 0x50
    op("MOV D,C", 1),    // 0x51
    op("MOV D,D", 1),    // 0x52
    op("MOV D,E", 1),    // 0x53
    op("MOV D,H", 1),    // 0x54
    op("MOV D,L", 1),    // 0x55
    op("MOV D,M", 1),    // 0x56
    op("MOV D,A", 1),    // 0x57
    op("MOV E,B", 1),    // 0x58
    op("MOV E,C", 1),    // 0x59
    op("MOV E,D", 1),    // 0x5A
    op("MOV E,E", 1),    // 0x5B
    op("MOV E,H", 1),    // 0x5C
    op("MOV E,L", 1),    // 0x5D
    op("MOV E,M", 1),    // 0x5E
    op("MOV E,A", 1),    // 0x5F
    op("MOV H,B", 1),    // 0x60
    op("MOV H,C", 1),    // 0x61
    op("MOV H,D", 1),    // 0x62
    op("MOV H,E", 1),    // 0x63
    op("MOV H,H", 1),    // 0x64
    op("MOV H,L", 1),    // 0x65
    op("MOV H,M", 1),    // 0x66
    op("MOV H,A", 1),    // 0x67
    op("MOV L,B", 1),    // 0x68
    op("MOV L,C", 1),    // 0x69
    op("MOV L,D", 1),    // 0x6A
    op("MOV L,E", 1),    // 0x6B
    op("MOV L,H", 1),    // 0x6C
    op("MOV L,L", 1),    // 0x6D
    op("MOV L,M", 1),    // 0x6E
    op("MOV L,A", 1),    // 0x6F
    op("MOV M,B", 1),    // 0x70
    op("MOV M,C", 1),    // 0x71
    op("MOV M,D", 1),    // 0x72
    op("MOV M,E", 1),    // 0x73
    op("MOV M,H", 1),    // 0x74
    op("MOV M,L", 1),    // 0x75
    op("HLT", 1),        // 0x76
    op("MOV M,A", 1),    // 0x77
    op("MOV A,B", 1),    // 0x78
    op("MOV A,C", 1),    // 0x79
    op("MOV A,D", 1),    // 0x7A
    op("MOV A,E", 1),    // 0x7B
    op("MOV A,H", 1),    // 0x7C
    op("MOV A,L", 1),    // 0x7D
    op("MOV A,M", 1),    // 0x7E
    op("MOV A,A", 1),    // 0x7F
    op("ADD B", 1),      // 0x80
    op("ADD C", 1),      // 0x81
    op("ADD D", 1),      // 0x82
    op("ADD E", 1),      // 0x83
    op("ADD H", 1),      // 0x84
    op("ADD L", 1),      // 0x85
    op("ADD M", 1),      // 0x86
    op("ADD A", 1),      // 0x87
    op("ADC B", 1),      // 0x88
    op("ADC C", 1),      // 0x89
    op("ADC D", 1),      // 0x8A
    op("ADC E", 1),      // 0x8B
    op("ADC H", 1),      // 0x8C
    op("ADC L", 1),      // 0x8D
    op("ADC M", 1),      // 0x8E
    op("ADC A", 1),      // 0x8F
    op("SUB B", 1),      // 0x90
    op("SUB C", 1),      // 0x91
    op("SUB D", 1),      // 0x92
    op("SUB E", 1),      // 0x93
    op("SUB H", 1),      // 0x94
    op("SUB L", 1),      // 0x95
    op("SUB M", 1),      // 0x96
    op("SUB A", 1),      // 0x97
    op("SBB B", 1),      // 0x98
    op("SBB C", 1),      // 0x99
    op("SBB D", 1),      // 0x9A
    op("SBB E", 1),      // 0x9B
    op("SBB H", 1),      // 0x9C
    op("SBB L", 1),      // 0x9D
    op("SBB M", 1),      // 0x9E
    op("SBB A", 1),      // 0x9F
    op("ANA B", 1),      // 0xA0
    op("ANA C", 1),      // 0xA1
    op("ANA D", 1),      // 0xA2
    op("ANA E", 1),      // 0xA3
    op("ANA H", 1),      // 0xA4
    op("ANA L", 1),      // 0xA5
    op("ANA M", 1),      // 0xA6
    op("ANA A", 1),      // 0xA7
    op("XRA B", 1),      // 0xA8
    op("XRA C", 1),      // 0xA9
    op("XRA D", 1),      // 0xAA
    op("XRA E", 1),      // 0xAB
    op("XRA H", 1),      // 0xAC
    op("XRA L", 1),      // 0xAD
    op("XRA M", 1),      // 0xAE
    op("XRA A", 1),      // 0xAF
    op("ORA B", 1),      // 0xB0
    op("ORA C", 1),      // 0xB1
    op("ORA D", 1),      // 0xB2
    op("ORA E", 1),      // 0xB3
    op("ORA H", 1),      // 0xB4
    op("ORA L", 1),      // 0xB5
    op("ORA M", 1),      // 0xB6
    op("ORA A", 1),      // 0xB7
    op("CMP B", 1),      // 0xB8
    op("CMP C", 1),      // 0xB9
    op("CMP D", 1),      // 0xBA
    op("CMP E", 1),      // 0xBB
    op("CMP H", 1),      // 0xBC
    op("CMP L", 1),      // 0xBD
    op("CMP M", 1),      // 0xBE
    op("CMP A", 1),      // 0xBF
    op("RNZ", 1),        // 0xC0
    op("POP B", 1),      // 0xC1
    op("JNZ a16", 3),    // 0xC2
    op("JMP a16", 3),    // 0xC3
    op("CNZ a16", 3),    // 0xC4
    op("PUSH B", 1),     // 0xC5
    op("ADI d8", 2),     // 0xC6
    op("RST 0", 1),      // 0xC7
    op("RZ", 1),         // 0xC8
    op("RET", 1),        // 0xC9
    op("JZ a16", 3),     // 0xCA
    alias(),             // 0xCB
    op("CZ a16", 3),     // 0xCC
    op("CALL a16", 3),   // 0xCD
    op("ACI d8", 2),     // 0xCE
    op("RST 1", 1),      // 0xCF
    op("RNC", 1),        // 0xD0
    op("POP D", 1),      // 0xD1
    op("JNC a16", 3),    // 0xD2
    op("OUT d8", 2),     // 0xD3
    op("CNC a16", 3),    // 0xD4
    op("PUSH D", 1),     // 0xD5
    op("SUI d8", 2),     // 0xD6
    op("RST 2", 1),      // 0xD7
    op("RC", 1),         // 0xD8
    alias(),             // 0xD9
    op("JC a16", 3),     // 0xDA
    op("IN d8", 2),      // 0xDB
    op("CC a16", 3),     // 0xDC
    alias(),             // 0xDD
    op("SBI d8", 2),     // 0xDE
    op("RST 3", 1),      // 0xDF
    op("RPO", 1),        // 0xE0
    op("POP H", 1),      // 0xE1
    op("JPO a16", 3),    // 0xE2
    op("XTHL", 1),       // 0xE3
    op("CPO a16", 3),    // 0xE4
    op("PUSH H", 1),     // 0xE5
    op("ANI d8", 2),     // 0xE6
    op("RST 4", 1),      // 0xE7
    op("RPE", 1),        // 0xE8
    op("PCHL", 1),       // 0xE9
    op("JPE a16", 3),    // 0xEA
    op("XCHG", 1),       // 0xEB
    op("CPE a16", 3),    // 0xEC
    alias(),             // 0xED
    op("XRI d8", 2),     // 0xEE
    op("RST 5", 1),      // 0xEF
    op("RP", 1),         // 0xF0
    op("POP PSW", 1),    // 0xF1
    op("JP a16", 3),     // 0xF2
    op("DI", 1),         // 0xF3
    op("CP a16", 3),     // 0xF4
    op("PUSH PSW", 1),   // 0xF5
    op("ORI d8", 2),     // 0xF6
    op("RST 6", 1),      // 0xF7
    op("RM", 1),         // 0xF8
    op("SPHL", 1),       // 0xF9
    op("JM a16", 3),     // 0xFA
    op("EI", 1),         // 0xFB
    op("CM a16", 3),     // 0xFC
    alias(),             // 0xFD
    op("CPI d8", 2),     // 0xFE
    op("RST 7", 1),      // 0xFF
];
