use std::path::PathBuf;

use anyhow::Context;

use crate::config::Config;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Resolves a request path against the web root by stripping the leading
/// slash.
fn resolve(cfg: &Config, path: &str) -> PathBuf {
    cfg.web_root.join(path.trim_start_matches('/'))
}

async fn read_file(cfg: &Config, path: &str) -> anyhow::Result<Vec<u8>> {
    let file = resolve(cfg, path);
    tokio::fs::read(&file)
        .await
        .with_context(|| format!("reading {}", file.display()))
}

pub async fn favicon(cfg: &Config, path: &str) -> anyhow::Result<Response> {
    let body = read_file(cfg, path).await?;
    Ok(Response::file("image/x-icon", body))
}

pub async fn stylesheet(cfg: &Config, path: &str) -> anyhow::Result<Response> {
    let body = read_file(cfg, path).await?;
    Ok(ResponseBuilder::new(StatusCode::Ok).body(body).build())
}
