mod beta;
mod cont_frac;
mod inc_beta;
pub mod traits;

pub use beta::beta;
pub use inc_beta::{checked_inc_beta, inc_beta};
pub use traits::Gamma;
