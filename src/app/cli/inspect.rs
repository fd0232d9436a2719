//! Route table inspection and config validation commands.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::domain::routes::match_route;
use crate::domain::{
    AppError, ApplicationVersion, PathParams, RouteError, RoutePattern, StudioConfig,
    URL_PATH_PLACEHOLDER, load_config,
};

#[derive(Serialize)]
struct MatchOutput<'a> {
    route: RoutePattern,
    template: &'a str,
    params: PathParams,
}

pub fn run_match(path: &str) -> Result<(), AppError> {
    let (route, params) =
        match_route(path)?.ok_or_else(|| RouteError::UnknownRoute(path.to_string()))?;
    let output = MatchOutput { route, template: route.template(), params };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn run_routes(name: Option<String>) -> Result<(), AppError> {
    let patterns = match name {
        Some(name) => vec![name.parse::<RoutePattern>()?],
        None => RoutePattern::ALL.to_vec(),
    };
    for pattern in patterns {
        println!("{:<24} {}", pattern.name(), pattern.template());
    }
    Ok(())
}

pub fn run_config(
    path: PathBuf,
    base_url: Option<String>,
    server_key: Option<String>,
) -> Result<(), AppError> {
    let data = load_config(&path)?;
    let config = StudioConfig::new(
        data,
        ApplicationVersion::current(),
        base_url.as_deref().unwrap_or("/"),
        server_key.as_deref().unwrap_or(URL_PATH_PLACEHOLDER),
    )?;
    let sdlc_server = config.sdlc_server_url()?;
    debug!(%sdlc_server, "resolved SDLC server");
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
