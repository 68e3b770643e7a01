// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cafe_order_domain::{RepeatMode, TimeOfDay};
use time::Date;

/// A command represents user intent on the scheduling screen as data only.
///
/// Commands are the only way to request session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click on a day number in the displayed month.
    ToggleDay {
        /// Day of the displayed month (1-based).
        day: u8,
    },
    /// Toggle a specific calendar date.
    ToggleDate {
        /// The date to toggle.
        date: Date,
    },
    /// Drop every selected date and reset the repeat mode.
    ClearSelection,
    /// Choose how the selected dates repeat.
    SetRepeat {
        /// The new repeat mode.
        mode: RepeatMode,
    },
    /// Choose the time of day for every occurrence.
    SetTime {
        /// The new time of day.
        time: TimeOfDay,
    },
    /// Show the previous month.
    PreviousMonth,
    /// Show the next month.
    NextMonth,
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ToggleDay { .. } => "ToggleDay",
            Self::ToggleDate { .. } => "ToggleDate",
            Self::ClearSelection => "ClearSelection",
            Self::SetRepeat { .. } => "SetRepeat",
            Self::SetTime { .. } => "SetTime",
            Self::PreviousMonth => "PreviousMonth",
            Self::NextMonth => "NextMonth",
        }
    }
}
