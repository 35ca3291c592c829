//! Core pricing calculation functions.
//!
//! Pure functions for lift pass pricing - no database access. Every input
//! (base price, holiday snapshot, date) is passed in by the caller.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::date::CivilDate;
use super::models::TicketType;

/// Monday reduction, in percent.
pub const MONDAY_REDUCTION: u32 = 35;

/// Children under this age ride free.
const FREE_BELOW_AGE: u32 = 6;
/// Day-ticket child rate applies below this age.
const CHILD_BELOW_AGE: u32 = 15;
/// Senior rates apply above this age.
const SENIOR_ABOVE_AGE: u32 = 64;

const NIGHT_SENIOR_RATE: Decimal = dec!(0.4);
const DAY_CHILD_RATE: Decimal = dec!(0.7);
const DAY_SENIOR_RATE: Decimal = dec!(0.75);

/// Apply `rate` to `base_price` and round up to the next whole unit.
/// Results above `u32::MAX` saturate.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use lift_pass_pricing::pricing::ceil_price;
///
/// assert_eq!(ceil_price(100, dec!(0.4)), 40);
/// assert_eq!(ceil_price(35, dec!(0.65)), 23); // 22.75
/// ```
pub fn ceil_price(base_price: u32, rate: Decimal) -> u32 {
    (Decimal::from(base_price) * rate)
        .ceil()
        .to_u32()
        .unwrap_or(u32::MAX)
}

/// `1 - reduction / 100`
fn reduction_rate(reduction: u32) -> Decimal {
    Decimal::ONE - Decimal::from(reduction) / Decimal::ONE_HUNDRED
}

/// True if some holiday has the same year, month and day as `date`.
/// An absent date is never a holiday.
pub fn is_holiday(date: Option<&CivilDate>, holidays: &[CivilDate]) -> bool {
    match date {
        Some(date) => holidays.iter().any(|holiday| date.matches(holiday)),
        None => false,
    }
}

/// Reduction percent for the requested date: 35 on a non-holiday Monday, else 0.
pub fn calculate_reduction(date: Option<&CivilDate>, holidays: &[CivilDate]) -> u32 {
    match date {
        Some(d) if d.is_monday() && !is_holiday(Some(d), holidays) => MONDAY_REDUCTION,
        _ => 0,
    }
}

/// Night ticket cost. Date reductions never apply.
///
/// An unspecified age costs 0. This matches the long-standing tariff even
/// though it reads like a gap; do not change it without a pricing decision.
pub fn calculate_cost_for_night_ticket(age: Option<u32>, base_price: u32) -> u32 {
    match age {
        None => 0,
        Some(age) if age < FREE_BELOW_AGE => 0,
        Some(age) if age > SENIOR_ABOVE_AGE => ceil_price(base_price, NIGHT_SENIOR_RATE),
        Some(_) => base_price,
    }
}

/// Day ticket cost.
///
/// The child tier (6-14) is a flat 70% and never gets the Monday reduction;
/// kept as the tariff defines it.
pub fn calculate_cost_for_day_ticket(
    age: Option<u32>,
    date: Option<&CivilDate>,
    base_price: u32,
    holidays: &[CivilDate],
) -> u32 {
    let reduction = reduction_rate(calculate_reduction(date, holidays));

    match age {
        None => ceil_price(base_price, reduction),
        Some(age) if age < FREE_BELOW_AGE => 0,
        Some(age) if age < CHILD_BELOW_AGE => ceil_price(base_price, DAY_CHILD_RATE),
        Some(age) if age > SENIOR_ABOVE_AGE => {
            ceil_price(base_price, DAY_SENIOR_RATE * reduction)
        }
        Some(_) => ceil_price(base_price, reduction),
    }
}

/// Dispatch on ticket type. Anything that is not a night ticket prices as a day ticket.
pub fn calculate_cost(
    age: Option<u32>,
    ticket_type: TicketType,
    date: Option<&CivilDate>,
    base_price: u32,
    holidays: &[CivilDate],
) -> u32 {
    match ticket_type {
        TicketType::Night => calculate_cost_for_night_ticket(age, base_price),
        TicketType::Day => calculate_cost_for_day_ticket(age, date, base_price, holidays),
    }
}
