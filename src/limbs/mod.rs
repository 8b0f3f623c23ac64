//! Limbs domain: limb state and interactive control capture.

mod capture;
mod limb;
#[cfg(test)]
mod tests;

pub use capture::BindingSession;
pub use limb::{LIMB_COUNT, Limb, LimbName};
