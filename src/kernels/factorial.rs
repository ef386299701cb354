//! This module contains the pure, stateless kernel for the integer factorial.
//!
//! The product is accumulated left to right over `2..=n`, so any `n < 2`
//! (including every negative `n`) yields 1. What happens when the product no
//! longer fits the accumulator is chosen by the caller through `FactorialPolicy`.

use num_traits::{FromPrimitive, PrimInt, WrappingMul};

use crate::config::FactorialPolicy;
use crate::error::NativeError;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

/// Computes `n!` in `T`, returning `None` on the first multiplication that overflows.
pub fn checked_factorial<T>(n: i64) -> Option<T>
where
    T: PrimInt + FromPrimitive,
{
    let mut acc = T::one();
    for i in 2..=n {
        acc = acc.checked_mul(&T::from_i64(i)?)?;
    }
    Some(acc)
}

/// Computes `n!` modulo 2^bits of `T`.
///
/// Once the accumulator hits zero every further product is zero, so the loop
/// stops there. For a k-bit type that happens as soon as `n!` holds k factors
/// of two, which keeps the loop short even for `n` near `i64::MAX`.
pub fn wrapping_factorial<T>(n: i64) -> T
where
    T: PrimInt + WrappingMul + FromPrimitive,
{
    let mut acc = T::one();
    for i in 2..=n {
        if acc.is_zero() {
            break;
        }
        // `i` has not yet exceeded the bit width of T here: the accumulator
        // reaches zero long before the loop counter outgrows the type.
        match T::from_i64(i) {
            Some(factor) => acc = acc.wrapping_mul(&factor),
            None => return T::zero(),
        }
    }
    acc
}

//==================================================================================
// 2. Public API
//==================================================================================

/// The factorial as exposed to Python: a 64-bit signed result under `policy`.
pub fn factorial(n: i64, policy: FactorialPolicy) -> Result<i64, NativeError> {
    let result = match policy {
        FactorialPolicy::Checked => {
            checked_factorial::<i64>(n).ok_or(NativeError::FactorialOverflow(n))
        }
        FactorialPolicy::Wrapping => Ok(wrapping_factorial::<i64>(n)),
    };
    log::debug!("factorial({}) under {:?} -> {:?}", n, policy, result);
    result
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        for policy in [FactorialPolicy::Checked, FactorialPolicy::Wrapping] {
            assert_eq!(factorial(0, policy).unwrap(), 1);
            assert_eq!(factorial(1, policy).unwrap(), 1);
            assert_eq!(factorial(5, policy).unwrap(), 120);
            assert_eq!(factorial(10, policy).unwrap(), 3_628_800);
            assert_eq!(factorial(20, policy).unwrap(), 2_432_902_008_176_640_000);
        }
    }

    #[test]
    fn test_negative_input_yields_one() {
        for policy in [FactorialPolicy::Checked, FactorialPolicy::Wrapping] {
            assert_eq!(factorial(-1, policy).unwrap(), 1);
            assert_eq!(factorial(i64::MIN, policy).unwrap(), 1);
        }
    }

    #[test]
    fn test_checked_overflow_is_an_error() {
        let result = factorial(21, FactorialPolicy::Checked);
        assert!(matches!(result, Err(NativeError::FactorialOverflow(21))));

        // Large inputs bail out on the first overflowing step.
        assert!(factorial(i64::MAX, FactorialPolicy::Checked).is_err());
    }

    #[test]
    fn test_wrapping_matches_fixed_width_arithmetic() {
        // 21! mod 2^64, reinterpreted as a signed 64-bit value.
        assert_eq!(
            factorial(21, FactorialPolicy::Wrapping).unwrap(),
            -4_249_290_049_419_214_848
        );
        // 65! holds 63 factors of two, 66! holds 64.
        assert_ne!(factorial(65, FactorialPolicy::Wrapping).unwrap(), 0);
        assert_eq!(factorial(66, FactorialPolicy::Wrapping).unwrap(), 0);
        assert_eq!(factorial(i64::MAX, FactorialPolicy::Wrapping).unwrap(), 0);
    }

    #[test]
    fn test_checked_limits_per_width() {
        assert_eq!(checked_factorial::<i32>(12), Some(479_001_600));
        assert_eq!(checked_factorial::<i32>(13), None);
        assert_eq!(checked_factorial::<u64>(20), Some(2_432_902_008_176_640_000));
        assert_eq!(checked_factorial::<u64>(21), None);
        assert!(checked_factorial::<u128>(34).is_some());
        assert_eq!(checked_factorial::<u128>(35), None);
    }

    #[test]
    fn test_wrapping_small_width() {
        // 6! = 720 = 2 * 256 + 208
        assert_eq!(wrapping_factorial::<u8>(6), 208);
        // 10! holds eight factors of two.
        assert_eq!(wrapping_factorial::<u8>(10), 0);
        assert_eq!(wrapping_factorial::<u8>(1_000), 0);
    }
}
