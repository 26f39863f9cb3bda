use crate::error::KernelError;
use crate::real::Real;
use crate::round::{RoundMethod, Rounder};

/// Scale/round mode for the simulation path of the converter. This is a
/// different enumeration from [`RoundMethod`]: codes 0 and 1 only exist
/// here, and code 3 means ceiling rather than std-round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TmpMethod {
    /// Pure scaling, no rounding or clamping; floating simulation.
    Scale = 0,
    Floor = 1,
    /// Negative exact half rounds up; clamping happens in the real domain
    /// before rounding.
    HalfUp = 2,
    Ceil = 3,
}

impl TryFrom<i32> for TmpMethod {
    type Error = KernelError;

    fn try_from(code: i32) -> Result<Self, KernelError> {
        Ok(match code {
            0 => TmpMethod::Scale,
            1 => TmpMethod::Floor,
            2 => TmpMethod::HalfUp,
            3 => TmpMethod::Ceil,
            _ => return Err(KernelError::UnsupportedTmpMethod(code)),
        })
    }
}

/// Quantize one value: scale by `val_amp`, round per `method`, add the
/// zero point, saturate into `[val_min, val_max]`.
pub fn fix_neuron<R: Real>(
    src: R,
    val_amp: R,
    zero_point: i32,
    val_min: i32,
    val_max: i32,
    method: RoundMethod,
    rounder: &mut Rounder,
) -> i32 {
    let res = rounder.round(src * val_amp, method) + zero_point;
    res.clamp(val_min, val_max)
}

/// Simulation-path converter. `dimi` selects multiplication by `1/val_amp`
/// instead of `val_amp` — the two paths are numerically distinct and are
/// deliberately not unified algebraically. `keep_scale` multiplies the
/// quantized integer back by the opposite amplitude, returning a dequantized
/// real instead of the raw fixed-point value.
pub fn fix_neuron_tmp<R: Real>(
    src: R,
    val_amp: R,
    val_min: i32,
    val_max: i32,
    dimi: bool,
    keep_scale: bool,
    method: TmpMethod,
) -> R {
    let one = R::from_i32(1);
    let scaled = if dimi { src * (one / val_amp) } else { src * val_amp };
    let rescale = |q: i32| -> R {
        if keep_scale {
            if dimi {
                R::from_i32(q) * val_amp
            } else {
                R::from_i32(q) * (one / val_amp)
            }
        } else {
            R::from_i32(q)
        }
    };
    match method {
        TmpMethod::Scale => scaled,
        TmpMethod::Floor | TmpMethod::Ceil => {
            let q = if method == TmpMethod::Floor {
                scaled.floor().to_i32()
            } else {
                scaled.ceil().to_i32()
            };
            rescale(q.clamp(val_min, val_max))
        }
        TmpMethod::HalfUp => {
            // Clamp against the real-domain bounds first, then round. A
            // value pinned at a bound rounds to that bound (the bounds are
            // integers).
            let zero = R::from_i32(0);
            let max_r = R::from_i32(val_max);
            let min_r = R::from_i32(val_min);
            let q = if scaled > max_r {
                val_max
            } else if scaled < min_r {
                val_min
            } else if scaled < zero && (scaled - scaled.floor()) == R::from_f64(0.5) {
                scaled.ceil().to_i32()
            } else {
                scaled.round().to_i32()
            };
            rescale(q)
        }
    }
}
