// Copyright 2018-2023 Developers of the Rand project.
// Copyright 2014-2017, 2019 Melissa O'Neill and PCG Project contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! PCG output permutations
//!
//! Each function maps a full LCG state to an output word half its width.
//! The shift constants are those of the PCG reference implementation.

/// Xorshift high bits, then rotate right by the top five state bits.
#[inline(always)]
pub fn xsh_rr_64_32(state: u64) -> u32 {
    // rotation count from the top 5 bits; 18 = (5 + 32) / 2, 27 = 32 - 5
    let rot = (state >> 59) as u32;
    let xsh = (((state >> 18) ^ state) >> 27) as u32;
    xsh.rotate_right(rot)
}

/// Xorshift high bits, then a right shift of 22 plus the top three state
/// bits.
#[inline(always)]
pub fn xsh_rs_64_32(state: u64) -> u32 {
    let shift = 22 + (state >> 61) as u32;
    ((state ^ (state >> 22)) >> shift) as u32
}

/// Xor the state halves together, then rotate right by the top six state
/// bits.
#[inline(always)]
pub fn xsl_rr_128_64(state: u128) -> u64 {
    let rot = (state >> 122) as u32;
    let xsl = ((state >> 64) as u64) ^ (state as u64);
    xsl.rotate_right(rot)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_state() {
        assert_eq!(xsh_rr_64_32(0), 0);
        assert_eq!(xsh_rs_64_32(0), 0);
        assert_eq!(xsl_rr_128_64(0), 0);
    }

    #[test]
    fn test_xsh_rr_rotation() {
        // top bits zero: no rotation, output is (state ^ state >> 18) >> 27
        let state = 1u64 << 27;
        assert_eq!(xsh_rr_64_32(state), 1);
        // rotation count 1 moves the low output bit to the top; bit 59
        // also lands on output bit 14 through the xorshift
        let state = (1u64 << 59) | (1 << 27);
        assert_eq!(xsh_rr_64_32(state), (1 << 31) | (1 << 13));
    }

    #[test]
    fn test_xsh_rs_shift() {
        let state = 1u64 << 22;
        assert_eq!(xsh_rs_64_32(state), 1);
        // top three bits 0b001 shift by 23 instead of 22
        let state = (1u64 << 61) | (1 << 23);
        assert_eq!(xsh_rs_64_32(state), ((state ^ (state >> 22)) >> 23) as u32);
    }

    #[test]
    fn test_xsl_rr_halves() {
        let state = (5u128 << 64) | 3;
        assert_eq!(xsl_rr_128_64(state), 6);
        let state = (1u128 << 122) | 1;
        assert_eq!(xsl_rr_128_64(state), (1u64 << 63) | (1 << 57));
    }
}
