//! Daily performance grade and vehicle wear.
//!
//! Both are integer bucketings; no floating point is involved.

use std::fmt;

/// Orders between scheduled services.
pub const SERVICE_INTERVAL_ORDERS: u64 = 400;

/// Health at or below which a service is due, in percent.
const SERVICE_DUE_PERCENT: u8 = 10;

/// Letter grade for orders completed against a target.
///
/// | Ratio        | Grade |
/// |--------------|-------|
/// | ≥ 120%       | S     |
/// | ≥ 100%       | A     |
/// | ≥ 75%        | B     |
/// | ≥ 50%        | C     |
/// | below 50%    | D     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerformanceGrade {
    /// Target beaten by at least a fifth.
    S,
    /// Target met.
    A,
    /// Three quarters of the target.
    B,
    /// Half the target.
    C,
    /// Less than half the target.
    D,
}

impl PerformanceGrade {
    /// Grade `orders` against `target`.
    ///
    /// Returns `None` when `target` is zero, since no ratio exists.
    ///
    /// # Examples
    /// ```
    /// use spotradar_core::PerformanceGrade;
    ///
    /// assert_eq!(PerformanceGrade::from_orders(24, 20), Some(PerformanceGrade::S));
    /// assert_eq!(PerformanceGrade::from_orders(9, 20), Some(PerformanceGrade::D));
    /// assert_eq!(PerformanceGrade::from_orders(5, 0), None);
    /// ```
    #[must_use]
    pub fn from_orders(orders: u32, target: u32) -> Option<Self> {
        if target == 0 {
            return None;
        }
        // Compare orders/target >= pct/100 as orders*100 >= target*pct.
        let scaled = u64::from(orders) * 100;
        let meets = |percent: u64| scaled >= u64::from(target) * percent;
        let grade = if meets(120) {
            Self::S
        } else if meets(100) {
            Self::A
        } else if meets(75) {
            Self::B
        } else if meets(50) {
            Self::C
        } else {
            Self::D
        };
        Some(grade)
    }

    /// Single-letter label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle wear modelled as a cycle over [`SERVICE_INTERVAL_ORDERS`].
///
/// # Examples
/// ```
/// use spotradar_core::VehicleHealth;
///
/// let health = VehicleHealth::from_total_orders(500);
/// assert_eq!(health.orders_since_service(), 100);
/// assert_eq!(health.health_percent(), 75);
/// assert_eq!(health.orders_until_service(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleHealth {
    total_orders: u64,
}

impl VehicleHealth {
    /// Wrap a lifetime order count.
    #[must_use]
    pub const fn from_total_orders(total_orders: u64) -> Self {
        Self { total_orders }
    }

    /// Lifetime orders.
    #[must_use]
    pub const fn total_orders(self) -> u64 {
        self.total_orders
    }

    /// Orders since the last completed service interval.
    #[must_use]
    pub const fn orders_since_service(self) -> u64 {
        self.total_orders.rem_euclid(SERVICE_INTERVAL_ORDERS)
    }

    /// Orders left before the next service.
    #[must_use]
    pub const fn orders_until_service(self) -> u64 {
        SERVICE_INTERVAL_ORDERS - self.orders_since_service()
    }

    /// Remaining health in percent, rounded down; 100 right after a service.
    #[must_use]
    pub fn health_percent(self) -> u8 {
        let worn = (self.orders_since_service() * 100).div_euclid(SERVICE_INTERVAL_ORDERS);
        // `worn` is below 100 because `orders_since_service` is below the interval.
        100_u8.saturating_sub(u8::try_from(worn).unwrap_or(100))
    }

    /// Whether health has dropped to the service threshold.
    #[must_use]
    pub fn service_due(self) -> bool {
        self.health_percent() <= SERVICE_DUE_PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(24, 20, PerformanceGrade::S)]
    #[case(23, 20, PerformanceGrade::A)]
    #[case(20, 20, PerformanceGrade::A)]
    #[case(15, 20, PerformanceGrade::B)]
    #[case(14, 20, PerformanceGrade::C)]
    #[case(10, 20, PerformanceGrade::C)]
    #[case(9, 20, PerformanceGrade::D)]
    #[case(0, 20, PerformanceGrade::D)]
    fn grade_thresholds_are_inclusive(
        #[case] orders: u32,
        #[case] target: u32,
        #[case] expected: PerformanceGrade,
    ) {
        assert_eq!(PerformanceGrade::from_orders(orders, target), Some(expected));
    }

    #[rstest]
    fn grade_handles_large_counts_without_overflow() {
        assert_eq!(
            PerformanceGrade::from_orders(u32::MAX, u32::MAX),
            Some(PerformanceGrade::A)
        );
    }

    #[rstest]
    #[case(0, 0, 100, 400)]
    #[case(1, 1, 99, 399)]
    #[case(399, 399, 1, 1)]
    #[case(400, 0, 100, 400)]
    #[case(1_250, 50, 88, 350)]
    fn health_cycles_every_interval(
        #[case] total: u64,
        #[case] since: u64,
        #[case] percent: u8,
        #[case] until: u64,
    ) {
        let health = VehicleHealth::from_total_orders(total);
        assert_eq!(health.orders_since_service(), since);
        assert_eq!(health.health_percent(), percent);
        assert_eq!(health.orders_until_service(), until);
    }

    #[rstest]
    #[case(359, false)]
    #[case(360, true)]
    #[case(400, false)]
    fn service_due_near_end_of_cycle(#[case] total: u64, #[case] due: bool) {
        assert_eq!(VehicleHealth::from_total_orders(total).service_due(), due);
    }
}
