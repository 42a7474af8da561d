// world/ - Scene geometry
//
// Pure functions over point sets.
// No state, no hidden randomness - callers pass the RNG in.

mod proximity;
mod sampler;

pub use proximity::*;
pub use sampler::*;
