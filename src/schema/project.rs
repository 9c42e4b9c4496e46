//! Project and team listing validation.

use serde_json::Value;

use crate::types::{FileRef, ProjectSummary, TeamProjectsSummary};

use super::value::Obj;
use super::SchemaError;

/// Validate a `GET /projects/:id/files` response body.
///
/// The response does not echo the project id, so the caller passes it in.
pub fn parse_project(value: &Value, project_id: &str) -> Result<ProjectSummary, SchemaError> {
    let root = Obj::new(value, "")?;
    let name = root.opt_str("name")?.unwrap_or_default();

    let items = root.req_array("files")?;
    let files = root
        .objects_in("files", items)?
        .iter()
        .map(|file| {
            Ok(FileRef {
                key: file.req_str("key")?,
                name: file.req_str("name")?,
                thumbnail_url: file.opt_str("thumbnail_url")?,
                last_modified: file.opt_str("last_modified")?,
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    Ok(ProjectSummary {
        id: project_id.to_string(),
        name,
        files,
    })
}

/// Validate a `GET /teams/:id/projects` response body.
pub fn parse_team_projects(value: &Value) -> Result<TeamProjectsSummary, SchemaError> {
    let root = Obj::new(value, "")?;

    let items = root.opt_array("projects")?;
    let projects = root
        .objects_in("projects", items)?
        .iter()
        .map(|project| {
            Ok(ProjectSummary {
                id: project.req_id("id")?,
                name: project.req_str("name")?,
                files: Vec::new(),
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    Ok(TeamProjectsSummary {
        name: root.opt_str("name")?,
        projects,
    })
}
