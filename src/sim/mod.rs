// sim/ - Animated decorative scenes
//
// Each scene owns its generated geometry and advances only from the
// elapsed time handed to `tick`. Scenes never read each other.

mod constellation;
mod decor;
mod motion;
mod planets;
mod sparkles;

pub use constellation::Constellation;
pub use decor::{Atom, FloatingSymbol, HeroDecor};
pub use motion::{Bob, FrameClock, Spin, Sway};
pub use planets::{Planet, PlanetField};
pub use sparkles::SparkleField;
