use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::round::RoundMethod;

/// Per-tensor quantization configuration as the host toolchain ships it
/// (method and seed travel as raw integers in the serialized form; the
/// method code is validated on use, not on deserialization).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantConfig {
    pub bitwidth: i32,
    pub val_min: i32,
    pub val_max: i32,
    pub zero_point: i32,
    pub method: i32,
    pub seed: u64,
}

impl QuantConfig {
    /// Symmetric signed range for `bitwidth` bits: [-2^(b-1), 2^(b-1) - 1].
    pub fn signed(bitwidth: i32) -> Self {
        let half = 1i32 << (bitwidth - 1);
        Self {
            bitwidth,
            val_min: -half,
            val_max: half - 1,
            zero_point: 0,
            method: RoundMethod::StdRound.code(),
            seed: 0,
        }
    }

    pub fn with_zero_point(mut self, zero_point: i32) -> Self {
        self.zero_point = zero_point;
        self
    }

    pub fn with_method(mut self, method: RoundMethod) -> Self {
        self.method = method.code();
        self
    }

    /// Decode the stored method code, rejecting anything outside 2..=9.
    pub fn method(&self) -> Result<RoundMethod> {
        RoundMethod::try_from(self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;

    #[test]
    fn signed_range_matches_bitwidth() {
        let c = QuantConfig::signed(8);
        assert_eq!((c.val_min, c.val_max), (-128, 127));
        let c = QuantConfig::signed(16);
        assert_eq!((c.val_min, c.val_max), (-32768, 32767));
    }

    #[test]
    fn bad_method_code_surfaces_on_decode() {
        let mut c = QuantConfig::signed(8);
        c.method = 11;
        assert_eq!(c.method().unwrap_err(), KernelError::UnsupportedMethod(11));
    }

    #[test]
    fn json_round_trip() {
        let c = QuantConfig::signed(8)
            .with_zero_point(3)
            .with_method(RoundMethod::HalfEven);
        let s = serde_json::to_string(&c).unwrap();
        let back: QuantConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back, c);
        assert_eq!(back.method().unwrap(), RoundMethod::HalfEven);
    }
}
