//! Intel 8080 CPU emulator.
//!
//! This crate provides a byte-accurate, instruction-level interpreter for
//! the Intel 8080, together with the small CP/M-flavored harness needed to
//! run classic diagnostic programs (`cpudiag`-style binaries). It supports:
//!
//! - All 256 opcodes, with the undocumented bytes aliased to NOP
//! - Full flag derivation: sign, zero, auxiliary carry, parity, carry
//! - DAA decimal adjust and the documented PSW byte layout
//! - CP/M BDOS console calls serviced through a host-side hook
//!
//! # Architecture
//!
//! The CPU owns its flat 64 KiB memory image outright; there is no bus
//! abstraction and no memory mapping. Programs load at `0x0100` (the CP/M
//! transient program area) and the host steps the CPU one instruction at a
//! time, servicing console requests between steps.
//!
//! # Example
//!
//! ```
//! use rusty8080_cpu::{bdos, Cpu, MEMORY_SIZE};
//!
//! let mut memory = Box::new([0u8; MEMORY_SIZE]);
//! // MVI A,0x2A at the load address
//! memory[0x0100] = 0x3E;
//! memory[0x0101] = 0x2A;
//! bdos::install_trampoline(&mut memory);
//!
//! let mut cpu = Cpu::new(memory);
//! cpu.step();
//! assert_eq!(cpu.a, 0x2A);
//! ```

#![warn(missing_docs)]

pub mod bdos;
mod cpu;
mod flags;
mod opcodes;
pub mod rom;
pub mod trace;

pub use cpu::{Cpu, MEMORY_SIZE, RESET_PC};
pub use flags::{parity_even, Flags};
pub use opcodes::{OpcodeInfo, OPCODE_TABLE};
pub use rom::{Program, RomError};
pub use trace::Tracer;
