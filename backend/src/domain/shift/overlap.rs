//! Overlap detection within one `(user, date)` bucket.

use super::{Shift, ShiftId, TimeWindow};

/// First shift in `bucket` whose window conflicts with `candidate`.
///
/// `exclude` skips the shift being updated so an unchanged window never
/// conflicts with itself. Callers pass only shifts sharing the candidate's
/// user and date.
pub fn first_conflict<'a, I>(
    candidate: &TimeWindow,
    bucket: I,
    exclude: Option<&ShiftId>,
) -> Option<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    bucket
        .into_iter()
        .filter(|shift| exclude.is_none_or(|id| shift.id() != id))
        .find(|shift| candidate.conflicts_with(shift.window()))
}
