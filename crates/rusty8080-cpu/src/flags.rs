//! CPU condition flags and the PSW (Processor Status Word) byte.
//!
//! The 8080 keeps five condition flags. When PUSH PSW saves them to the
//! stack they are packed into a single byte with three reserved bits:
//!
//! ```text
//! 7  6  5  4  3  2  1  0
//! S  Z  0  AC 0  P  1  CY
//! │  │  │  │  │  │  │  └─ Carry / borrow
//! │  │  │  │  │  │  └──── Reserved (always 1 when pushed)
//! │  │  │  │  │  └─────── Parity (1 = even number of set bits)
//! │  │  │  │  └────────── Reserved (always 0 when pushed)
//! │  │  │  └───────────── Auxiliary carry (carry out of bit 3)
//! │  │  └──────────────── Reserved (always 0 when pushed)
//! │  └─────────────────── Zero
//! └────────────────────── Sign (bit 7 of the result)
//! ```
//!
//! The flags live at their PSW bit positions at all times, so PUSH PSW only
//! has to stamp the reserved bits and POP PSW only has to mask them off.

use bitflags::bitflags;

bitflags! {
    /// 8080 condition flags, stored at their PSW bit positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        /// Carry flag - Set on carry out of bit 7 for addition, or borrow
        /// for subtraction. The rotate instructions shift through it.
        const CY = 1 << 0;

        /// Parity flag - Set when the result has an even number of 1-bits.
        const P = 1 << 2;

        /// Auxiliary carry flag - Set on carry from bit 3 to bit 4.
        /// Only DAA consumes it.
        const AC = 1 << 4;

        /// Zero flag - Set if the result of the last operation was zero.
        const Z = 1 << 6;

        /// Sign flag - Set if bit 7 of the result is set.
        const S = 1 << 7;
    }
}

/// Reserved PSW bit that reads as 1 (bit 1).
const PSW_ALWAYS_SET: u8 = 1 << 1;

/// Even-parity lookup for every byte value. Saves a popcount per ALU result.
static PARITY_EVEN: [bool; 256] = build_parity_table();

const fn build_parity_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut value = 0usize;
    while value < 256 {
        table[value] = (value as u8).count_ones() % 2 == 0;
        value += 1;
    }
    table
}

/// Returns true when `value` has an even number of set bits.
#[inline]
#[must_use]
pub fn parity_even(value: u8) -> bool {
    PARITY_EVEN[value as usize]
}

impl Flags {
    /// Sets or clears the Sign, Zero and Parity flags from a result byte.
    #[inline]
    pub fn set_szp(&mut self, value: u8) {
        self.set_flag(Self::S, value & 0x80 != 0);
        self.set_flag(Self::Z, value == 0);
        self.set_flag(Self::P, parity_even(value));
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn set_flag(&mut self, flag: Self, value: bool) {
        if value {
            *self |= flag;
        } else {
            *self &= !flag;
        }
    }

    /// Packs the flags into the byte PUSH PSW stores: bit 1 forced to 1,
    /// bits 3 and 5 forced to 0.
    #[inline]
    #[must_use]
    pub const fn to_psw_byte(self) -> u8 {
        self.bits() | PSW_ALWAYS_SET
    }

    /// Restores the flags from a byte popped by POP PSW.
    /// The reserved bits are discarded.
    #[inline]
    #[must_use]
    pub fn from_psw_byte(value: u8) -> Self {
        Self::from_bits_truncate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_szp_zero() {
        let mut flags = Flags::empty();
        flags.set_szp(0);
        assert!(flags.contains(Flags::Z));
        assert!(!flags.contains(Flags::S));
        // 0 has zero set bits, which is even
        assert!(flags.contains(Flags::P));
    }

    #[test]
    fn test_set_szp_sign() {
        let mut flags = Flags::empty();
        flags.set_szp(0x80);
        assert!(!flags.contains(Flags::Z));
        assert!(flags.contains(Flags::S));
        assert!(!flags.contains(Flags::P));
    }

    #[test]
    fn test_set_szp_parity() {
        let mut flags = Flags::empty();
        // 0x03 = two bits set = even parity
        flags.set_szp(0x03);
        assert!(flags.contains(Flags::P));
        // 0x07 = three bits set = odd parity
        flags.set_szp(0x07);
        assert!(!flags.contains(Flags::P));
    }

    #[test]
    fn test_parity_table_matches_popcount() {
        for value in 0..=u8::MAX {
            assert_eq!(parity_even(value), value.count_ones() % 2 == 0);
        }
    }

    #[test]
    fn test_to_psw_byte_reserved_bits() {
        let byte = Flags::empty().to_psw_byte();
        assert_eq!(byte, 0x02);

        let byte = Flags::all().to_psw_byte();
        assert_eq!(byte & (1 << 1), 1 << 1);
        assert_eq!(byte & (1 << 3), 0);
        assert_eq!(byte & (1 << 5), 0);
    }

    #[test]
    fn test_from_psw_byte_discards_reserved() {
        let flags = Flags::from_psw_byte(0xFF);
        assert_eq!(flags, Flags::all());
        assert_eq!(flags.bits(), 0xD5);
    }

    #[test]
    fn test_psw_round_trip() {
        let flags = Flags::S | Flags::AC | Flags::CY;
        assert_eq!(Flags::from_psw_byte(flags.to_psw_byte()), flags);
    }
}
