//! Machine epsilon for the floating-point search variants.
//!
//! The default tolerance of every float search is the machine epsilon of the
//! element type: the smallest power of two `ε` for which `1.0 + ε > 1.0` still
//! holds. It is derived once by repeated halving and then cached for the
//! lifetime of the process.
//!
//! The derived values equal [`f32::EPSILON`] and [`f64::EPSILON`].

use std::fmt;
use std::sync::OnceLock;

use log::debug;
use num_traits::Float;

static F32_EPSILON: OnceLock<f32> = OnceLock::new();
static F64_EPSILON: OnceLock<f64> = OnceLock::new();

/// Floating-point element types with a cached machine epsilon.
pub trait MachineEpsilon: Float {
    /// Machine epsilon for this width, computed on first use.
    fn machine_epsilon() -> Self;
}

impl MachineEpsilon for f32 {
    #[inline]
    fn machine_epsilon() -> Self {
        *F32_EPSILON.get_or_init(|| derive_epsilon(FloatWidth::F32))
    }
}

impl MachineEpsilon for f64 {
    #[inline]
    fn machine_epsilon() -> Self {
        *F64_EPSILON.get_or_init(|| derive_epsilon(FloatWidth::F64))
    }
}

/// Width of a floating-point element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatWidth::F32 => f.write_str("f32"),
            FloatWidth::F64 => f.write_str("f64"),
        }
    }
}

/// Machine epsilon of `F`.
#[inline]
pub fn machine_epsilon<F: MachineEpsilon>() -> F {
    F::machine_epsilon()
}

#[inline]
pub fn machine_epsilon_f32() -> f32 {
    f32::machine_epsilon()
}

#[inline]
pub fn machine_epsilon_f64() -> f64 {
    f64::machine_epsilon()
}

/// Machine epsilon for `width`, widened to `f64`.
pub fn machine_epsilon_for(width: FloatWidth) -> f64 {
    match width {
        FloatWidth::F32 => f64::from(machine_epsilon_f32()),
        FloatWidth::F64 => machine_epsilon_f64(),
    }
}

fn derive_epsilon<F: Float + fmt::Debug>(width: FloatWidth) -> F {
    let one = F::one();
    let two = one + one;
    let mut epsilon = one;
    let mut halvings = 0u32;
    while one + epsilon / two > one {
        epsilon = epsilon / two;
        halvings += 1;
    }
    debug!("derived {width} machine epsilon {epsilon:?} after {halvings} halvings");
    epsilon
}
