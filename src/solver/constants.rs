// Configuration defaults for the equation search
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
pub const DEFAULT_MAX_GROUPS: usize = 5;
