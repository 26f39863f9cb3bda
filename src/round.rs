use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::KernelError;
use crate::real::Real;

/// Hardware rounding policy, keyed by the accelerator's method codes.
/// Codes 0 and 1 belong to the converter's scale/floor path and are not
/// members of this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum RoundMethod {
    /// Negative exact half rounds up (toward zero); everything else rounds
    /// half away from zero.
    HalfUp = 2,
    /// Host `round()`: half away from zero on both sides.
    StdRound = 3,
    /// Toward negative infinity.
    Floor = 4,
    /// Negative half up, positive half to nearest even.
    NegHalfUpPosHalfEven = 5,
    /// Ties on both sides break toward zero.
    TowardZero = 6,
    /// Toward positive infinity.
    Up = 7,
    /// Banker's rounding: ties to nearest even on both sides.
    HalfEven = 8,
    /// Add a uniform draw in [0,1) and floor.
    Stochastic = 9,
}

impl RoundMethod {
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for RoundMethod {
    type Error = KernelError;

    fn try_from(code: i32) -> Result<Self, KernelError> {
        Ok(match code {
            2 => RoundMethod::HalfUp,
            3 => RoundMethod::StdRound,
            4 => RoundMethod::Floor,
            5 => RoundMethod::NegHalfUpPosHalfEven,
            6 => RoundMethod::TowardZero,
            7 => RoundMethod::Up,
            8 => RoundMethod::HalfEven,
            9 => RoundMethod::Stochastic,
            _ => return Err(KernelError::UnsupportedMethod(code)),
        })
    }
}

/// Rounding engine. The only state is the RNG consumed by the stochastic
/// policy; it is seeded explicitly by the caller instead of from the wall
/// clock, so runs are reproducible. Deterministic policies never touch it.
pub struct Rounder {
    rng: SmallRng,
}

impl Rounder {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Round `x` to an integer per the selected policy.
    ///
    /// A "tie" is a fractional part exactly equal to 0.5 under the host
    /// float arithmetic; representation error can make ties rarer than
    /// mathematically expected, and that is the behaviour the hardware
    /// reference exhibits too.
    pub fn round<R: Real>(&mut self, x: R, method: RoundMethod) -> i32 {
        let zero = R::from_i32(0);
        let tie = (x - x.floor()) == R::from_f64(0.5);
        match method {
            RoundMethod::HalfUp => {
                if x < zero && tie {
                    x.ceil().to_i32()
                } else {
                    x.round().to_i32()
                }
            }
            RoundMethod::StdRound => x.round().to_i32(),
            RoundMethod::Floor => x.floor().to_i32(),
            RoundMethod::NegHalfUpPosHalfEven => {
                if x < zero && tie {
                    x.ceil().to_i32()
                } else if tie {
                    let f = x.floor().to_i32();
                    if f % 2 == 0 { f } else { x.ceil().to_i32() }
                } else {
                    x.round().to_i32()
                }
            }
            RoundMethod::TowardZero => {
                if x < zero && tie {
                    x.ceil().to_i32()
                } else if x > zero && tie {
                    x.floor().to_i32()
                } else {
                    x.round().to_i32()
                }
            }
            RoundMethod::Up => x.ceil().to_i32(),
            RoundMethod::HalfEven => {
                if x < zero && tie {
                    // Reference checks ceil parity on the negative side.
                    let c = x.ceil().to_i32();
                    if c % 2 == 0 { c } else { x.floor().to_i32() }
                } else if tie {
                    let f = x.floor().to_i32();
                    if f % 2 == 0 { f } else { x.ceil().to_i32() }
                } else {
                    x.round().to_i32()
                }
            }
            RoundMethod::Stochastic => {
                let u: f64 = self.rng.gen();
                (x + R::from_f64(u)).floor().to_i32()
            }
        }
    }
}
