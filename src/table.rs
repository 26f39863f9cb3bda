//! Table-driven sigmoid/tanh approximation. Tables are generated by the
//! surrounding toolchain and consumed read-only here; the hardware has a
//! float-addressed path (1024-wide half-domain around index 1024) and a
//! fixed-point-addressed path (2048-wide, shift-indexed), and both are
//! reproduced exactly, degenerate boundary cases included.

use crate::real::Real;

/// Float-addressed sigmoid lookup. Saturates to 32767 at `src >= 8*amp` and
/// to 0 below `-8*amp`; in between the magnitude is scaled into the 1024-wide
/// half-domain and reduced mod 1024 before indexing.
pub fn mapping_sigm<R: Real>(output_amp: R, table: &[i32], src: R) -> R {
    let hi = R::from_i32(8) * output_amp;
    let lo = R::from_i32(-8) * output_amp;
    if src >= hi {
        return R::from_i32(32767);
    }
    if src < lo {
        return R::from_i32(0);
    }
    let t128 = R::from_i32(128);
    // Two scale orders: dividing a small amplitude by 128 first would lose
    // the fractional index, so the factor flips around amp == 128.
    let index_of = |m: R| -> i32 {
        if output_amp >= t128 {
            (m / (output_amp / t128)).floor().to_i32()
        } else {
            (m * (t128 / output_amp)).floor().to_i32()
        }
    };
    if src >= R::from_i32(0) {
        let pos = index_of(src) % 1024;
        R::from_i32(table[(1024 + pos) as usize])
    } else {
        let pos = index_of(src.abs()) % 1024;
        if src == lo && pos == 0 {
            // Exactly at the negative boundary the reduced index collapses
            // to 0 and the hardware emits 0, not table[1024].
            R::from_i32(0)
        } else {
            R::from_i32(table[(1024 - pos) as usize])
        }
    }
}

/// Float-addressed tanh lookup: ±4*amp saturation to {32767, -32768}, a
/// 256-based amplitude threshold, and the negative-boundary degenerate case
/// reading table[0].
pub fn mapping_tanh<R: Real>(output_amp: R, table: &[i32], src: R) -> R {
    let hi = R::from_i32(4) * output_amp;
    let lo = R::from_i32(-4) * output_amp;
    if src >= hi {
        return R::from_i32(32767);
    }
    if src < lo {
        return R::from_i32(-32768);
    }
    let t256 = R::from_i32(256);
    let index_of = |m: R| -> i32 {
        if output_amp >= t256 {
            (m / (output_amp / t256)).floor().to_i32()
        } else {
            (m * (t256 / output_amp)).floor().to_i32()
        }
    };
    if src >= R::from_i32(0) {
        let pos = index_of(src) % 1024;
        R::from_i32(table[(1024 + pos) as usize])
    } else {
        let pos = index_of(src.abs()) % 1024;
        if src == lo && pos == 0 {
            R::from_i32(table[pos as usize])
        } else {
            R::from_i32(table[(1024 - pos) as usize])
        }
    }
}

/// Fixed-point-addressed sigmoid: `src` already carries `output_fp`
/// fractional bits, so saturation tests and indexing are pure shifts and the
/// float domain is never entered. Negative reduced indices fold back by
/// +2048 before the access.
pub fn mapping_i_sigm(output_fp: i32, table: &[i32], src: i32) -> i32 {
    if (src >> output_fp) >= 8 {
        return 32767;
    }
    if (src >> output_fp) < -8 {
        return 0;
    }
    let mut pos = if output_fp >= 7 {
        src >> (output_fp - 7)
    } else {
        src << (7 - output_fp)
    };
    pos %= 2048;
    if pos < 0 {
        table[(2048 + pos) as usize]
    } else {
        table[pos as usize]
    }
}

/// Fixed-point-addressed tanh: ±4 saturation to {32767, -32768} and an
/// 8-bit shift threshold.
pub fn mapping_i_tanh(output_fp: i32, table: &[i32], src: i32) -> i32 {
    if (src >> output_fp) >= 4 {
        return 32767;
    }
    if (src >> output_fp) < -4 {
        return -32768;
    }
    let mut pos = if output_fp >= 8 {
        src >> (output_fp - 8)
    } else {
        src << (8 - output_fp)
    };
    pos %= 2048;
    if pos < 0 {
        table[(2048 + pos) as usize]
    } else {
        table[pos as usize]
    }
}
