//! Project and team listings.

use serde::Serialize;

/// A project and the files it contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub files: Vec<FileRef>,
}

/// A file reference inside a project listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

/// All projects belonging to a team.
///
/// Team listings do not include files, so each project's `files` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProjectsSummary {
    pub name: Option<String>,
    pub projects: Vec<ProjectSummary>,
}
