//! Project records with derived funding figures and status filtering.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::CatalogError;
use crate::data::PROJECTS;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectStatus {
    Active,
    Planning,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Planning, Self::Completed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Planning => "Planning",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge badge--green",
            Self::Planning => "badge badge--yellow",
            Self::Completed => "badge badge--blue",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProjectStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CatalogError::UnknownStatus(trimmed.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectCategory {
    #[serde(rename = "Water & Sanitation")]
    WaterSanitation,
    Education,
    Healthcare,
    #[serde(rename = "Economic Development")]
    EconomicDevelopment,
    Agriculture,
}

impl ProjectCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WaterSanitation => "Water & Sanitation",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::EconomicDevelopment => "Economic Development",
            Self::Agriculture => "Agriculture",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::WaterSanitation => "badge badge--outline badge--blue",
            Self::Education => "badge badge--outline badge--purple",
            Self::Healthcare => "badge badge--outline badge--red",
            Self::EconomicDevelopment => "badge badge--outline badge--green",
            Self::Agriculture => "badge badge--outline badge--orange",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PhaseStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Upcoming,
}

impl PhaseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Upcoming => "Upcoming",
        }
    }

    /// CSS class for the timeline dot.
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Completed => "timeline__dot timeline__dot--done",
            Self::InProgress => "timeline__dot timeline__dot--active",
            Self::Upcoming => "timeline__dot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelinePhase {
    pub name: &'static str,
    pub status: PhaseStatus,
    pub date_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub location: &'static str,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    /// Whole dollars.
    pub funding_goal: u64,
    /// Whole dollars.
    pub funding_raised: u64,
    pub beneficiaries: u32,
    /// `YYYY-MM-DD`.
    pub start_date: &'static str,
    /// `YYYY-MM-DD`.
    pub end_date: &'static str,
    pub image: &'static str,
    pub impact: &'static str,
    pub objectives: &'static [&'static str],
    pub timeline: &'static [TimelinePhase],
}

impl ProjectRecord {
    /// Raised as a percentage of goal. A zero goal reports 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn funding_percentage(&self) -> f64 {
        if self.funding_goal == 0 {
            return 0.0;
        }
        self.funding_raised as f64 / self.funding_goal as f64 * 100.0
    }

    /// Percentage rounded to the nearest whole number for labels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percentage(&self) -> u32 {
        self.funding_percentage().round() as u32
    }

    /// Progress-bar width, clamped to `0..=100`.
    #[must_use]
    pub fn progress_width(&self) -> f64 {
        self.funding_percentage().clamp(0.0, 100.0)
    }

    /// Dollars still needed to reach the goal (never negative).
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.funding_goal.saturating_sub(self.funding_raised)
    }

    #[must_use]
    pub fn start(&self) -> Option<Date> {
        parse_iso_date(self.start_date)
    }

    #[must_use]
    pub fn end(&self) -> Option<Date> {
        parse_iso_date(self.end_date)
    }

    #[must_use]
    pub fn start_year(&self) -> Option<i32> {
        self.start().map(Date::year)
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

/// Status filter for the projects list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectStatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl ProjectStatusFilter {
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All)
            .chain(ProjectStatus::ALL.into_iter().map(Self::Only))
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Only(status) => status.label(),
        }
    }

    #[must_use]
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

#[must_use]
pub fn all_projects() -> &'static [ProjectRecord] {
    &PROJECTS
}

#[must_use]
pub fn find_project(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[must_use]
pub fn filter_projects(
    records: &[ProjectRecord],
    filter: ProjectStatusFilter,
) -> Vec<&ProjectRecord> {
    records
        .iter()
        .filter(|project| filter.matches(project.status))
        .collect()
}

/// Parse the `{id}` route segment.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidProjectId`] unless the segment is a
/// positive integer.
pub fn parse_project_id(raw: &str) -> Result<u32, CatalogError> {
    match raw.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CatalogError::InvalidProjectId(raw.to_owned())),
    }
}

/// Parse a `YYYY-MM-DD` record date. Impossible calendar dates are `None`.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), ISO_DATE).ok()
}

/// Format a `YYYY-MM-DD` date as `Jan 15, 2024`. Input that is not a real
/// calendar date is returned as-is.
#[must_use]
pub fn display_date(raw: &str) -> String {
    parse_iso_date(raw)
        .and_then(|date| date.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| raw.to_owned())
}
