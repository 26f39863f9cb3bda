// Bit-exact kernels for simulating fixed-point NN accelerator quantization:
// hardware rounding policies, scale/shift with wraparound, and table-driven
// sigmoid/tanh. Scalar kernels are pure; the bulk module maps them over
// flat arrays.
pub mod bulk;
pub mod config;
pub mod error;
pub mod fix;
pub mod real;
pub mod round;
pub mod scale;
pub mod table;

pub use config::QuantConfig;
pub use error::KernelError;
pub use fix::{fix_neuron, fix_neuron_tmp, TmpMethod};
pub use real::Real;
pub use round::{RoundMethod, Rounder};
