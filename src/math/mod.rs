pub mod polygon_2d;
pub mod sampling;

/// 2D point type. `x` is the major radius (or plan-view x), `y` the height.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Right angle, the span of every plan-view fill.
pub const RIGHT_ANGLE: f64 = std::f64::consts::FRAC_PI_2;
