//! Project listing command.

use crate::report::render_projects;
use crate::services::list_projects;

/// List the user's projects.
pub async fn cmd_projects(json: bool) -> anyhow::Result<()> {
    let projects = list_projects().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        print!("{}", render_projects(&projects));
    }
    Ok(())
}
