//! Protocol-level constants shared by request parsing and strategy ordering.

/// Request parameter that forces fresh authentication. Presence is the
/// signal; the value is never inspected.
pub const PARAMETER_RENEW: &str = "renew";

/// Request parameter carrying the target service identifier.
pub const PARAMETER_SERVICE: &str = "service";

/// Highest precedence (runs first in a strategy chain).
pub const HIGHEST_PRECEDENCE: i32 = i32::MIN;

/// Lowest precedence (runs last). Default order for strategies.
pub const LOWEST_PRECEDENCE: i32 = i32::MAX;
