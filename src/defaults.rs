//! Default scale, viewport and discretization settings

use crate::types::Step;

/// Device units per math unit
pub const UNIT: f64 = 400.0;
/// Device viewport width (five times a 1280px window)
pub const VIEWPORT_WIDTH: f64 = 5.0 * 1280.0;
/// Device viewport height (five times a 720px window)
pub const VIEWPORT_HEIGHT: f64 = 5.0 * 720.0;
/// Discretization step for derivatives, integrals and Riemann strips
pub const STEP: Step = Step::new(0.1);
/// Arrowhead length as a fraction of one unit
pub const ARROWHEAD_LENGTH: f64 = 1.0 / 5.0;
/// Arrowhead half width as a fraction of one unit
pub const ARROWHEAD_HALF_WIDTH: f64 = 1.0 / 10.0;
