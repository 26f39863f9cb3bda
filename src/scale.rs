//! Scale/shift helpers. Everything here saturates on overflow except
//! [`scale_shift`], which wraps — that wrap is hardware behaviour and must
//! not be replaced with a clamp.

use crate::real::Real;

/// Bit-shift rescale with wraparound into the signed range implied by
/// `bitwidth`. Left-shifts when `shift > 0`, arithmetic right-shift
/// otherwise. Values past `2^bitwidth - 1` (or below `-2^bitwidth`) re-enter
/// the range modulo its width, which can flip sign.
pub fn scale_shift(result: i32, bitwidth: i32, shift: i32) -> i32 {
    let shifted = if shift > 0 { result << shift } else { result >> -shift };
    let max_val = 1i32 << bitwidth;
    if shifted > max_val - 1 {
        shifted % max_val - max_val
    } else if shifted < -max_val {
        max_val + shifted % (-max_val)
    } else {
        shifted
    }
}

/// Multiply by an amplitude.
#[inline]
pub fn amp<R: Real>(v: R, val_amp: R) -> R {
    v * val_amp
}

/// Divide by an amplitude.
#[inline]
pub fn dimi<R: Real>(v: R, val_amp: R) -> R {
    v / val_amp
}

/// Floor to an integer, saturate into [val_min, val_max], cast back.
pub fn floor_clamp<R: Real>(v: R, val_min: i32, val_max: i32) -> R {
    R::from_i32(v.floor().to_i32().clamp(val_min, val_max))
}

/// Multiply by the amplitude, then floor-and-saturate.
pub fn amp_floor<R: Real>(v: R, val_amp: R, val_min: i32, val_max: i32) -> R {
    floor_clamp(v * val_amp, val_min, val_max)
}

/// Divide by the amplitude, then floor-and-saturate.
pub fn dimi_floor<R: Real>(v: R, val_amp: R, val_min: i32, val_max: i32) -> R {
    floor_clamp(v / val_amp, val_min, val_max)
}

/// Divide by the amplitude and saturate against *real* bounds, without
/// flooring. The deferred cast belongs to the caller.
pub fn dimi_floor_real<R: Real>(v: R, val_amp: R, val_min: R, val_max: R) -> R {
    let r = v / val_amp;
    if r > val_max {
        val_max
    } else if r < val_min {
        val_min
    } else {
        r
    }
}

/// Integer divide (or multiply, when the amplitude is below one) with the
/// hardware's floor correction: truncation toward zero would bias negative
/// inexact quotients upward, so those are decremented by one.
pub fn dimi_int<R: Real>(result: i32, diff_amp: R) -> i32 {
    let one = R::from_i32(1);
    let tmp = if diff_amp >= one {
        (R::from_i32(result) / diff_amp).to_i32()
    } else {
        (R::from_i32(result) * diff_amp).to_i32()
    };
    if diff_amp > one && result % diff_amp.to_i32() != 0 && result < 0 {
        tmp - 1
    } else {
        tmp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_shift_wraps_above_range() {
        // bitwidth 8 covers [-256, 255]; 300 wraps, never clamps to 255.
        assert_eq!(scale_shift(300, 8, 0), 300 % 256 - 256); // -212
        assert_eq!(scale_shift(300, 8, 0), -212);
        assert_eq!(scale_shift(75, 8, 2), 44 - 256); // 300 after the shift
    }

    #[test]
    fn scale_shift_wraps_below_range() {
        assert_eq!(scale_shift(-300, 8, 0), 256 + (-300 % -256)); // 212
        assert_eq!(scale_shift(-300, 8, 0), 212);
    }

    #[test]
    fn scale_shift_in_range_passthrough() {
        assert_eq!(scale_shift(255, 8, 0), 255);
        assert_eq!(scale_shift(-256, 8, 0), -256);
        assert_eq!(scale_shift(-40, 8, -2), -10);
        assert_eq!(scale_shift(3, 8, 4), 48);
    }

    #[test]
    fn floor_family_saturates() {
        assert_eq!(amp_floor(100.0f64, 4.0, -128, 127), 127.0);
        assert_eq!(amp_floor(1.9f64, 2.0, -128, 127), 3.0);
        assert_eq!(dimi_floor(-1000.0f32, 2.0, -128, 127), -128.0);
        assert_eq!(floor_clamp(-0.5f64, -128, 127), -1.0);
    }

    #[test]
    fn dimi_floor_real_keeps_fraction() {
        assert_eq!(dimi_floor_real(7.0f64, 2.0, -4.0, 4.0), 3.5);
        assert_eq!(dimi_floor_real(100.0f64, 2.0, -4.0, 4.0), 4.0);
        assert_eq!(dimi_floor_real(-100.0f64, 2.0, -4.0, 4.0), -4.0);
    }

    #[test]
    fn dimi_int_corrects_negative_truncation() {
        // -7/3 truncates to -2; floor semantics demand -3.
        assert_eq!(dimi_int(-7, 3.0f64), -3);
        assert_eq!(dimi_int(7, 3.0f64), 2);
        assert_eq!(dimi_int(-6, 3.0f64), -2); // exact division, no correction
        assert_eq!(dimi_int(-7, 1.0f64), -7); // amp == 1 is never corrected
    }

    #[test]
    fn dimi_int_multiplies_for_small_amplitude() {
        assert_eq!(dimi_int(-7, 0.5f64), -3); // trunc(-3.5), no correction branch
        assert_eq!(dimi_int(9, 0.5f32), 4);
    }
}
