use serde::Serialize;

use crate::data::model::{CellValue, Dataset};

/// Fixed column groups shown as tables when the upload carries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionGroup {
    Assignments,
    Calendar,
    Messages,
}

impl ProjectionGroup {
    pub const ALL: [ProjectionGroup; 3] = [
        ProjectionGroup::Assignments,
        ProjectionGroup::Calendar,
        ProjectionGroup::Messages,
    ];

    /// Exact, case-sensitive column names the group needs.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            ProjectionGroup::Assignments => {
                &["Assignment", "Subject", "Due Date", "Score", "Status"]
            }
            ProjectionGroup::Calendar => &["Event", "Date"],
            ProjectionGroup::Messages => &["Message", "Date"],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ProjectionGroup::Assignments => "Recent Assignments",
            ProjectionGroup::Calendar => "Academic Calendar",
            ProjectionGroup::Messages => "Messages",
        }
    }
}

/// A dataset restricted to one group's columns, row order preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub group: ProjectionGroup,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project `group`'s columns, or `None` if any of them is missing.
pub fn project(dataset: &Dataset, group: ProjectionGroup) -> Option<Projection> {
    let indices = group
        .required_columns()
        .iter()
        .map(|name| dataset.column_index(name))
        .collect::<Option<Vec<usize>>>()?;

    let rows = dataset
        .rows()
        .iter()
        .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
        .collect();

    Some(Projection {
        group,
        columns: group.required_columns().iter().map(|c| c.to_string()).collect(),
        rows,
    })
}
