// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{SchedulingSession, TransitionResult};
use cafe_order_domain::{Clock, Expansion, ExpansionOutcome, RepeatMode, expand};
use cafe_order_notice::Notice;
use time::Date;
use tracing::{debug, warn};

/// Applies a command to a session, producing a new session and an optional notice.
///
/// This function is pure: it does not modify `session`. The scheduled dates
/// of the returned session are recomputed in full from its anchors, repeat
/// mode and today's date.
///
/// In edit mode a date click replaces the selection, and `SetRepeat` and
/// `ClearSelection` are ignored.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `clock` - Source of today's date
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and any notice
/// * `Err(CoreError)` if date arithmetic fails
///
/// # Errors
///
/// Returns an error if month navigation or recurrence expansion leaves the
/// supported date range.
pub fn apply(
    session: &SchedulingSession,
    command: Command,
    clock: &dyn Clock,
) -> Result<TransitionResult, CoreError> {
    let today: Date = clock.today();
    debug!(
        command = command.name(),
        mode = session.mode.name(),
        %today,
        "Applying command"
    );

    let mut next: SchedulingSession = session.clone();
    let mut repeat_requested: bool = false;

    match command {
        Command::ToggleDay { day } => match session.displayed_month.date_of(day) {
            Some(date) => select(&mut next, date, today),
            None => warn!(
                day,
                month = %session.displayed_month,
                "Ignoring click outside the displayed month"
            ),
        },
        Command::ToggleDate { date } => select(&mut next, date, today),
        Command::ClearSelection => {
            if session.is_edit() {
                debug!("Clearing the selection is not available in edit mode");
            } else {
                next.anchors.clear();
                next.repeat = RepeatMode::None;
            }
        }
        Command::SetRepeat { mode } => {
            if session.is_edit() {
                debug!(%mode, "Repeat is not available in edit mode");
            } else {
                next.repeat = mode;
                repeat_requested = true;
            }
        }
        Command::SetTime { time } => {
            next.time = time;
        }
        Command::PreviousMonth => {
            next.displayed_month = session.displayed_month.previous()?;
        }
        Command::NextMonth => {
            next.displayed_month = session.displayed_month.next()?;
        }
    }

    let expansion: Expansion = expand(next.anchors.as_slice(), next.repeat, today)?;
    next.scheduled = expansion.dates;

    let notice: Option<Notice> = if repeat_requested {
        notice_for(expansion.outcome)
    } else {
        None
    };

    debug!(
        anchors = next.anchors.len(),
        scheduled = next.scheduled.len(),
        repeat = %next.repeat,
        "Session recomputed"
    );

    Ok(TransitionResult {
        new_session: next,
        notice,
    })
}

/// Picking a date in create mode drops any repeat, so a click never adds
/// repeated orders without a fresh `SetRepeat` and its notice.
fn select(session: &mut SchedulingSession, date: Date, today: Date) {
    if session.is_edit() {
        if !session.anchors.replace(date, today) && date < today {
            debug!(%date, %today, "Ignoring past date");
        }
        return;
    }
    if !session.anchors.toggle(date, today) {
        debug!(%date, %today, "Ignoring past date");
        return;
    }
    if session.repeat != RepeatMode::None {
        debug!(repeat = %session.repeat, "Date selection changed, resetting repeat");
        session.repeat = RepeatMode::None;
    }
}

fn notice_for(outcome: ExpansionOutcome) -> Option<Notice> {
    match outcome {
        ExpansionOutcome::Unchanged => None,
        ExpansionOutcome::NoAnchors => {
            warn!("Repeat requested without any selected date");
            Some(Notice::warning("Please select a date first."))
        }
        ExpansionOutcome::Applied(RepeatMode::Weekly) => Some(Notice::info(format!(
            "Weekly repeat applied for {} weeks.",
            RepeatMode::Weekly.occurrences_per_anchor()
        ))),
        #[cfg(feature = "monthly-repeat")]
        ExpansionOutcome::Applied(RepeatMode::Monthly) => Some(Notice::info(format!(
            "Monthly repeat applied for {} months.",
            RepeatMode::Monthly.occurrences_per_anchor()
        ))),
        ExpansionOutcome::Applied(RepeatMode::None) => None,
    }
}
