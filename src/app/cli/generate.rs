//! `generate` command implementation.

use clap::Subcommand;

use crate::domain::routes::{
    generate_editor_route, generate_review_route, generate_setup_route,
    generate_view_entity_route, generate_view_project_by_gav_route, generate_view_project_route,
    generate_view_revision_route, generate_view_version_route,
};
use crate::domain::{AppError, WorkspaceKind};

#[derive(Subcommand)]
pub enum GenerateCommands {
    /// Setup page, optionally narrowed to a project and workspace
    Setup {
        #[arg(short, long)]
        project: Option<String>,
        #[arg(short, long)]
        workspace: Option<String>,
        /// Workspace kind: individual or group
        #[arg(short, long)]
        kind: Option<WorkspaceKind>,
    },
    /// Editor for a workspace
    #[clap(visible_alias = "e")]
    Edit {
        project: String,
        workspace: String,
        /// Workspace kind: individual or group
        #[arg(short, long, default_value = "individual")]
        kind: WorkspaceKind,
    },
    /// Review of a project change
    Review { project: String, review: String },
    /// Latest project revision, or one entity in it
    #[clap(visible_alias = "v")]
    View {
        project: String,
        #[arg(short, long)]
        entity: Option<String>,
    },
    /// Published version addressed by group, artifact and version
    ViewGav {
        group: String,
        artifact: String,
        version: String,
        #[arg(short, long)]
        entity: Option<String>,
    },
    /// Released project version
    ViewVersion {
        project: String,
        version: String,
        #[arg(short, long)]
        entity: Option<String>,
    },
    /// Project at a specific revision
    ViewRevision {
        project: String,
        revision: String,
        #[arg(short, long)]
        entity: Option<String>,
    },
}

pub fn run_generate(command: GenerateCommands) -> Result<(), AppError> {
    let path = match command {
        GenerateCommands::Setup { project, workspace, kind } => {
            generate_setup_route(project.as_deref(), workspace.as_deref(), kind)?
        }
        GenerateCommands::Edit { project, workspace, kind } => {
            generate_editor_route(&project, &workspace, kind)?
        }
        GenerateCommands::Review { project, review } => generate_review_route(&project, &review)?,
        GenerateCommands::View { project, entity: None } => generate_view_project_route(&project)?,
        GenerateCommands::View { project, entity: Some(entity) } => {
            generate_view_entity_route(&project, &entity)?
        }
        GenerateCommands::ViewGav { group, artifact, version, entity } => {
            generate_view_project_by_gav_route(&group, &artifact, &version, entity.as_deref())?
        }
        GenerateCommands::ViewVersion { project, version, entity } => {
            generate_view_version_route(&project, &version, entity.as_deref())?
        }
        GenerateCommands::ViewRevision { project, revision, entity } => {
            generate_view_revision_route(&project, &revision, entity.as_deref())?
        }
    };
    println!("{}", path);
    Ok(())
}
