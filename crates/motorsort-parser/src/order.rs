//! Weekend order resolution.

use crate::sprint::SprintWeekends;
use crate::vocabulary::{Calendar, WeekendOrders, FORMULA_ONE};

/// The session has no slot in the selected ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session '{session}' not found in {calendar} weekend order")]
pub struct OrderError {
    pub session: String,
    pub calendar: Calendar,
}

/// Ordering that applies to a weekend.
pub fn calendar_for(series: &str, season: &str, round: &str, sprints: &SprintWeekends) -> Calendar {
    if series != FORMULA_ONE {
        Calendar::Generic
    } else if sprints.contains(season, round) {
        Calendar::Sprint
    } else {
        Calendar::Regular
    }
}

/// Two digit, 1-based position of `session` in the weekend's ordering.
///
/// # Example
///
/// ```
/// use motorsort_parser::{resolve_order, SprintWeekends, WeekendOrders};
///
/// let orders = WeekendOrders::default();
/// let mut sprints = SprintWeekends::new();
/// sprints.insert("2024", "05");
///
/// let order = resolve_order("Formula 1", "Sprint", "2024", "05", &sprints, &orders);
/// assert_eq!(order.unwrap(), "08");
/// ```
pub fn resolve_order(
    series: &str,
    session: &str,
    season: &str,
    round: &str,
    sprints: &SprintWeekends,
    orders: &WeekendOrders,
) -> Result<String, OrderError> {
    let calendar = calendar_for(series, season, round, sprints);

    orders
        .sequence(calendar)
        .iter()
        .position(|label| label == session)
        .map(|index| format!("{:02}", index + 1))
        .ok_or_else(|| OrderError {
            session: session.to_string(),
            calendar,
        })
}
