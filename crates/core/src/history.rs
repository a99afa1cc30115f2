// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The command history manager.
//!
//! A [`History`] owns the only mutable copy of the roster. Every edit goes
//! through [`History::dispatch`], which runs the pure reducer and records
//! the previous frame so it can be undone. Frames are shared behind `Arc`,
//! so recording a frame never copies the dataset.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use shift_roster_domain::{Roster, ViewState};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Configuration for a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of past frames kept. Always at least 1.
    pub depth: usize,
}

impl HistoryConfig {
    /// Creates a new `HistoryConfig`. A depth of 0 is raised to 1.
    #[must_use]
    pub const fn new(depth: usize) -> Self {
        Self {
            depth: if depth == 0 { 1 } else { depth },
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

/// What a dispatched command did to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The edit changed the roster and was recorded.
    Recorded {
        /// The revision after the edit.
        revision: u64,
    },
    /// The edit produced an identical roster; nothing was recorded.
    Unchanged,
    /// A navigation command updated the present frame only.
    Untracked,
    /// The dataset was replaced and both stacks were cleared.
    Restored {
        /// The revision after the restore.
        revision: u64,
    },
}

/// Undo/redo stacks around the present roster.
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<Arc<Roster>>,
    present: Arc<Roster>,
    future: VecDeque<Arc<Roster>>,
    config: HistoryConfig,
    revision: u64,
}

impl History {
    /// Creates a history with the default depth.
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self::with_config(roster, HistoryConfig::default())
    }

    /// Creates a history with an explicit configuration.
    #[must_use]
    pub fn with_config(roster: Roster, config: HistoryConfig) -> Self {
        Self {
            past: VecDeque::new(),
            present: Arc::new(roster),
            future: VecDeque::new(),
            config: HistoryConfig::new(config.depth),
            revision: 0,
        }
    }

    /// Applies a command to the present roster.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to apply
    ///
    /// # Returns
    ///
    /// * `Recorded` if the edit changed the roster; the previous frame is
    ///   pushed onto the undo stack and the redo stack is cleared
    /// * `Unchanged` if the edit produced an identical roster
    /// * `Untracked` for navigation commands, which replace the present
    ///   frame without touching either stack
    /// * `Restored` for a full restore, which clears both stacks
    ///
    /// # Errors
    ///
    /// Returns the reducer's error. The history is unchanged on error.
    pub fn dispatch(&mut self, command: Command) -> Result<DispatchOutcome, CoreError> {
        if let Command::Restore { roster } = command {
            return Ok(self.restore(*roster));
        }

        let name: &'static str = command.name();
        let tracked: bool = command.is_tracked();
        let next: Roster = apply(&self.present, command)?;

        if next == *self.present {
            trace!(command = name, "Command left the roster unchanged");
            return Ok(DispatchOutcome::Unchanged);
        }

        if !tracked {
            self.present = Arc::new(next);
            return Ok(DispatchOutcome::Untracked);
        }

        let previous: Arc<Roster> = std::mem::replace(&mut self.present, Arc::new(next));
        self.push_past(previous);
        self.future.clear();
        self.revision += 1;

        debug!(
            command = name,
            revision = self.revision,
            undo_depth = self.past.len(),
            "Recorded edit"
        );
        Ok(DispatchOutcome::Recorded {
            revision: self.revision,
        })
    }

    /// Steps back one edit.
    ///
    /// Returns `false` and changes nothing when there is nothing to undo.
    /// The current view state carries over to the restored frame.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            trace!("Nothing to undo");
            return false;
        };

        let current: Arc<Roster> = std::mem::replace(&mut self.present, previous);
        keep_view(&mut self.present, &current.view);
        self.future.push_front(current);
        self.revision += 1;

        debug!(
            revision = self.revision,
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Undo"
        );
        true
    }

    /// Re-applies the most recently undone edit.
    ///
    /// Returns `false` and changes nothing when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            trace!("Nothing to redo");
            return false;
        };

        let current: Arc<Roster> = std::mem::replace(&mut self.present, next);
        keep_view(&mut self.present, &current.view);
        self.push_past(current);
        self.revision += 1;

        debug!(
            revision = self.revision,
            undo_depth = self.past.len(),
            redo_depth = self.future.len(),
            "Redo"
        );
        true
    }

    /// The current roster.
    #[must_use]
    pub fn present(&self) -> &Roster {
        &self.present
    }

    /// A shared handle to the current roster, e.g. for persistence.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.present)
    }

    /// Returns whether there is an edit to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Returns whether there is an undone edit to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of edits that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of edits that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Monotonic counter, incremented by every recorded edit, undo, redo and
    /// restore.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The configuration in effect, with the depth already clamped.
    #[must_use]
    pub const fn config(&self) -> HistoryConfig {
        self.config
    }

    fn restore(&mut self, roster: Roster) -> DispatchOutcome {
        self.past.clear();
        self.future.clear();
        self.present = Arc::new(roster);
        self.revision += 1;

        info!(
            revision = self.revision,
            operators = self.present.operators.len(),
            entries = self.present.entries.len(),
            "Restored roster, history cleared"
        );
        DispatchOutcome::Restored {
            revision: self.revision,
        }
    }

    fn push_past(&mut self, frame: Arc<Roster>) {
        self.past.push_back(frame);
        while self.past.len() > self.config.depth {
            self.past.pop_front();
            debug!(depth = self.config.depth, "Dropped oldest undo step");
        }
    }
}

/// Carries the view state into a frame being restored.
///
/// A selected operator that does not exist in the frame is cleared.
fn keep_view(frame: &mut Arc<Roster>, view: &ViewState) {
    let mut carried: ViewState = view.clone();
    if carried
        .selected_operator
        .as_ref()
        .is_some_and(|id| frame.operator(id).is_none())
    {
        carried.selected_operator = None;
    }

    if frame.view != carried {
        Arc::make_mut(frame).view = carried;
    }
}
