// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer seeds and sequence selectors

/// An integer usable as a seed or a sequence selector.
///
/// Any primitive integer is accepted. Values are normalised rather than
/// rejected: a value is first reduced modulo 2<sup>128</sup> (signed values
/// use their two's-complement representation, so `-1` is all ones), and each
/// generator then reduces it further modulo 2<sup>W</sup> for its state width
/// `W`. Seeding with `-1i32` and with `u64::MAX` therefore gives the same
/// 64-bit-state generator.
pub trait SeedValue: Copy {
    /// The value reduced modulo 2<sup>128</sup>.
    fn to_seed_word(self) -> u128;
}

macro_rules! impl_seed_value {
    (unsigned: $($ty:ty),*) => {$(
        impl SeedValue for $ty {
            #[inline]
            fn to_seed_word(self) -> u128 {
                self as u128
            }
        }
    )*};
    (signed: $($ty:ty),*) => {$(
        impl SeedValue for $ty {
            #[inline]
            fn to_seed_word(self) -> u128 {
                // sign-extend first, so negative values wrap modulo 2^128
                self as i128 as u128
            }
        }
    )*};
}

impl_seed_value!(unsigned: u8, u16, u32, u64, u128, usize);
impl_seed_value!(signed: i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_negative_values_wrap() {
        assert_eq!((-1i8).to_seed_word(), u128::MAX);
        assert_eq!((-1i64).to_seed_word() as u64, u64::MAX);
        assert_eq!((-5i32).to_seed_word() as u64, 5u64.wrapping_neg());
        assert_eq!(i128::MIN.to_seed_word(), 1u128 << 127);
    }

    #[test]
    fn test_unsigned_values_unchanged() {
        assert_eq!(0u8.to_seed_word(), 0);
        assert_eq!(54321usize.to_seed_word(), 54321);
        assert_eq!(u128::MAX.to_seed_word(), u128::MAX);
    }
}
