// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transient notices shown to the user after a scheduling action.
//!
//! A notice is advisory only: it never blocks or gates another operation.
//! Posting a new notice replaces the current one along with its expiry.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use time::{Duration, PrimitiveDateTime};

/// How long a notice stays visible.
pub const NOTICE_LIFETIME: Duration = Duration::milliseconds(2500);

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Confirmation of something that happened.
    Info,
    /// The request had no effect and the user should act.
    Warning,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// The text shown.
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A notice together with the moment it stops being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedNotice {
    /// The notice.
    pub notice: Notice,
    /// When it was posted.
    pub posted_at: PrimitiveDateTime,
    /// When it expires (exclusive).
    pub expires_at: PrimitiveDateTime,
}

/// Holds at most one notice and clears it once its lifetime has passed.
///
/// Time is supplied by the caller, so the board needs no timer of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<PostedNotice>,
}

impl NoticeBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Shows `notice`, replacing whatever was shown before.
    pub fn post(&mut self, notice: Notice, now: PrimitiveDateTime) {
        self.current = Some(PostedNotice {
            notice,
            posted_at: now,
            expires_at: now.saturating_add(NOTICE_LIFETIME),
        });
    }

    /// Returns the notice visible at `now`, if any.
    #[must_use]
    pub fn visible(&self, now: PrimitiveDateTime) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|posted| now < posted.expires_at)
            .map(|posted| &posted.notice)
    }

    /// Drops the current notice if it has expired by `now`.
    ///
    /// # Returns
    ///
    /// `true` if a notice was cleared.
    pub fn clear_expired(&mut self, now: PrimitiveDateTime) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|posted| now >= posted.expires_at)
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Returns the posted notice regardless of expiry.
    #[must_use]
    pub const fn posted(&self) -> Option<&PostedNotice> {
        self.current.as_ref()
    }
}
