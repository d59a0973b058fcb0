mod line;
mod intersection;
mod coefficients;

pub use self::line::*;
pub use self::coefficients::*;
pub use self::intersection::*;

pub use super::geo::*;
