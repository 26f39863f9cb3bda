//! Array-level entry points. Each one validates shapes up front, then maps
//! the scalar kernels elementwise; no element's result depends on another's,
//! so callers are free to split arrays and parallelize outside this crate.

use log::debug;

use crate::error::{KernelError, Result};
use crate::fix::{fix_neuron, fix_neuron_tmp, TmpMethod};
use crate::real::Real;
use crate::round::{RoundMethod, Rounder};
use crate::table::{mapping_sigm, mapping_tanh};

// Both float-addressed paths read table[1024 - 1023] through table[1024 + 1023].
const TABLE_LEN: usize = 2048;

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(KernelError::ShapeMismatch { expected, got });
    }
    Ok(())
}

fn check_table(table: &[i32]) -> Result<()> {
    if table.len() < TABLE_LEN {
        return Err(KernelError::TableTooSmall { needed: TABLE_LEN, got: table.len() });
    }
    Ok(())
}

/// Sigmoid table lookup over `input`; `fragpos` is the shared fixed-point
/// exponent, so the amplitude is `2^fragpos`.
pub fn sigmoid_table_lookup<R: Real>(
    input: &[R],
    table: &[i32],
    fragpos: i32,
    output: &mut [R],
) -> Result<()> {
    check_len(input.len(), output.len())?;
    check_table(table)?;
    debug!("sigmoid_table_lookup: n={} fragpos={}", input.len(), fragpos);
    let amp = R::from_i32(fragpos).exp2();
    for (x, y) in input.iter().zip(output.iter_mut()) {
        *y = mapping_sigm(amp, table, *x);
    }
    Ok(())
}

/// Tanh table lookup over `input` with amplitude `2^fragpos`.
pub fn tanh_table_lookup<R: Real>(
    input: &[R],
    table: &[i32],
    fragpos: i32,
    output: &mut [R],
) -> Result<()> {
    check_len(input.len(), output.len())?;
    check_table(table)?;
    debug!("tanh_table_lookup: n={} fragpos={}", input.len(), fragpos);
    let amp = R::from_i32(fragpos).exp2();
    for (x, y) in input.iter().zip(output.iter_mut()) {
        *y = mapping_tanh(amp, table, *x);
    }
    Ok(())
}

/// Fix-neuron with a per-element fragpos already computed by the caller:
/// element i quantizes with amplitude `2^fragpos[i]` through the simulation
/// converter.
pub fn fix_neuron_v1<R: Real>(
    src: &[R],
    fragpos: &[R],
    dst: &mut [R],
    val_min: i32,
    val_max: i32,
    keep_scale: bool,
    method: TmpMethod,
) -> Result<()> {
    check_len(src.len(), fragpos.len())?;
    check_len(src.len(), dst.len())?;
    debug!("fix_neuron_v1: n={} method={:?}", src.len(), method);
    for i in 0..src.len() {
        let amp = fragpos[i].exp2();
        dst[i] = fix_neuron_tmp(src[i], amp, val_min, val_max, false, keep_scale, method);
    }
    Ok(())
}

/// Fix-neuron with one amplitude and zero point for the whole array. With
/// `keep_scale` the quantized integer is divided back by the amplitude,
/// returning dequantized reals.
#[allow(clippy::too_many_arguments)]
pub fn fix_neuron_v2<R: Real>(
    src: &[R],
    dst: &mut [R],
    val_min: i32,
    val_max: i32,
    val_amp: R,
    zero_point: i32,
    keep_scale: bool,
    method: RoundMethod,
    rounder: &mut Rounder,
) -> Result<()> {
    check_len(src.len(), dst.len())?;
    debug!(
        "fix_neuron_v2: n={} range=[{}, {}] zero_point={} method={:?}",
        src.len(),
        val_min,
        val_max,
        zero_point,
        method
    );
    for (x, y) in src.iter().zip(dst.iter_mut()) {
        let q = fix_neuron(*x, val_amp, zero_point, val_min, val_max, method, rounder);
        *y = if keep_scale { R::from_i32(q) / val_amp } else { R::from_i32(q) };
    }
    Ok(())
}

/// Per-channel fix-neuron: row r of the `rows x cols` matrix quantizes with
/// `scale[r]` and `zero_point[r]`, otherwise identical to [`fix_neuron_v2`].
#[allow(clippy::too_many_arguments)]
pub fn fix_neuron_v2_2d<R: Real>(
    rows: usize,
    cols: usize,
    src: &[R],
    dst: &mut [R],
    val_min: i32,
    val_max: i32,
    scale: &[R],
    zero_point: &[i32],
    keep_scale: bool,
    method: RoundMethod,
    rounder: &mut Rounder,
) -> Result<()> {
    check_len(rows * cols, src.len())?;
    check_len(rows * cols, dst.len())?;
    check_len(rows, scale.len())?;
    check_len(rows, zero_point.len())?;
    debug!("fix_neuron_v2_2d: rows={} cols={} method={:?}", rows, cols, method);
    for r in 0..rows {
        let amp = scale[r];
        let zp = zero_point[r];
        for c in 0..cols {
            let i = r * cols + c;
            let q = fix_neuron(src[i], amp, zp, val_min, val_max, method, rounder);
            dst[i] = if keep_scale { R::from_i32(q) / amp } else { R::from_i32(q) };
        }
    }
    Ok(())
}

/// Elementwise rounding of an array.
pub fn round_array<R: Real>(
    src: &[R],
    dst: &mut [R],
    method: RoundMethod,
    rounder: &mut Rounder,
) -> Result<()> {
    check_len(src.len(), dst.len())?;
    for (x, y) in src.iter().zip(dst.iter_mut()) {
        *y = R::from_i32(rounder.round(*x, method));
    }
    Ok(())
}

/// Error-minimizing fixed-point scale search. The search objective and
/// algorithm belong to the host toolchain; this crate only fixes the call
/// shape: quantize `src` at `bitwidth`, trying scales within `range` of the
/// starting exponent, write the quantized result and return the chosen
/// scale exponent.
pub trait ScaleSearch<R: Real> {
    fn diff_s(
        &self,
        src: &[R],
        output: &mut [R],
        bitwidth: i32,
        range: i32,
        method: RoundMethod,
    ) -> Result<i32>;
}

/// Fixed-point square-root family used by layer-normalization hardware
/// emulation. Elementwise contracts only; the approximation polynomials are
/// supplied by the host toolchain.
pub trait SqrtApprox<R: Real> {
    fn layernorm_isqrt(&self, src: &[R], dst: &mut [R]) -> Result<()>;
    fn aie_sqrt(&self, src: &[R], dst: &mut [R]) -> Result<()>;
    fn aie_isqrt(&self, src: &[R], dst: &mut [R]) -> Result<()>;
}
