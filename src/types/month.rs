//! Calendar month helpers.
//!
//! Month names always come from [`chrono::Month::name`], which is fixed English and
//! never consults the host locale.

use chrono::Month;
use serde::Serializer;

/// The twelve months in calendar order, January first.
pub const CALENDAR_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Maps a 1-based month number (as produced by polars' `dt().month()`) to a [`Month`].
pub(crate) fn month_from_number(number: u32) -> Option<Month> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    CALENDAR_MONTHS.get(index).copied()
}

pub(crate) fn serialize_month_name<S>(month: &Month, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(month.name())
}
