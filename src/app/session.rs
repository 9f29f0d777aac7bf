//! Application session state
//!
//! A [`Session`] owns the loaded record set and the current view settings.
//! State changes go through [`Session::apply`]; everything shown to the user
//! is derived from the current state by [`Session::view`], so there is no
//! cached view that could fall out of sync.

use std::borrow::Cow;

use tracing::debug;

use crate::app::aggregate::Aggregate;
use crate::app::detail::{select_detail, DetailView};
use crate::app::filter::{filter_records, FilterState};
use crate::app::loader::LoadOutcome;
use crate::app::models::{Field, Record, RecordSet};

/// A single change to the session's view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// Change the field the query is matched against
    SetField(Field),
    /// Replace the query text
    SetQuery(String),
    /// Change the field the summary is grouped by
    SetGroupBy(Field),
    /// Show or hide the summary badges
    ToggleSummary,
    /// Show or hide the proportion chart
    ToggleChart,
}

/// Presentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub show_summary: bool,
    pub show_chart: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            show_summary: true,
            show_chart: true,
        }
    }
}

/// Everything the presentation layer needs for one render
#[derive(Debug)]
pub struct SessionView<'a> {
    pub columns: &'a [String],
    pub visible: Cow<'a, [Record]>,
    pub aggregate: Aggregate,
    pub filter: &'a FilterState,
    pub toggles: Toggles,
    pub error: Option<String>,
}

impl SessionView<'_> {
    /// Which detail view applies to the visible records
    pub fn detail(&self) -> DetailView<'_> {
        select_detail(&self.visible, self.filter.field)
    }
}

/// Loaded data plus view state for one run of the application
#[derive(Debug)]
pub struct Session {
    outcome: LoadOutcome,
    filter: FilterState,
    group_by: Field,
    toggles: Toggles,
}

impl Session {
    /// Start a session over a load outcome with default view settings
    pub fn new(outcome: LoadOutcome) -> Self {
        Self {
            outcome,
            filter: FilterState::default(),
            group_by: Field::State,
            toggles: Toggles::default(),
        }
    }

    /// Override the initial view settings
    pub fn with_settings(mut self, filter: FilterState, group_by: Field, toggles: Toggles) -> Self {
        self.filter = filter;
        self.group_by = group_by;
        self.toggles = toggles;
        self
    }

    /// Apply one state change
    pub fn apply(&mut self, update: Update) {
        debug!("Applying session update: {:?}", update);
        match update {
            Update::SetField(field) => self.filter.field = field,
            Update::SetQuery(query) => self.filter.query = query,
            Update::SetGroupBy(field) => self.group_by = field,
            Update::ToggleSummary => self.toggles.show_summary = !self.toggles.show_summary,
            Update::ToggleChart => self.toggles.show_chart = !self.toggles.show_chart,
        }
    }

    /// Derive the current view from state
    pub fn view(&self) -> SessionView<'_> {
        let records = self.outcome.records();
        SessionView {
            columns: records.columns(),
            visible: filter_records(records.records(), &self.filter),
            aggregate: Aggregate::from_records(records.records(), self.group_by),
            filter: &self.filter,
            toggles: self.toggles,
            error: self.outcome.error_message(),
        }
    }

    pub fn records(&self) -> &RecordSet {
        self.outcome.records()
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn group_by(&self) -> Field {
        self.group_by
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }
}
