/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f32 = 0.001;

/// Length we consider a 'close' distance (we may round to this precision or cut out points that are closer than this)
pub const CLOSE_DISTANCE: f32 = 0.01;

/// Difference in t values below which two positions on a curve are considered to be the same
pub const SMALL_T_DISTANCE: f32 = 0.00001;

/// Lines whose directions differ by less than this (as the sine of the angle between them) are treated as parallel
pub const PARALLEL_EPSILON: f32 = 0.000001;

/// Leading polynomial coefficients smaller than this are treated as zero (the polynomial drops a degree)
pub const DEGENERATE_COEFFICIENT: f32 = 0.000001;

/// Maximum recursion depth when clipping two curves against each other
pub const MAX_CLIP_DEPTH: usize = 20;
