use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::client::{FetchError, StatusSource};
use crate::render::Renderer;

/// Fetch both feeds concurrently and render them, components first.
/// Either fetch failing aborts the run before anything is rendered.
#[instrument(skip_all)]
pub async fn run(source: Arc<dyn StatusSource>) -> Result<String> {
    let components_task: JoinHandle<Result<_, FetchError>> = {
        let source = source.clone();
        tokio::spawn(async move { source.components().await })
    };
    let incidents_task: JoinHandle<Result<_, FetchError>> =
        tokio::spawn(async move { source.incidents().await });

    let (components, incidents) = tokio::try_join!(
        join_fetch("components", components_task),
        join_fetch("incidents", incidents_task),
    )?;
    info!(
        components = components.components.len(),
        incidents = incidents.incidents.len(),
        "status feeds fetched"
    );

    let mut renderer = Renderer::new(Vec::new());
    renderer.components(&components);
    renderer.incidents(&incidents);
    let buf = renderer.finish().context("failed to write summary")?;
    String::from_utf8(buf).context("rendered output is not UTF-8")
}

async fn join_fetch<T>(feed: &'static str, task: JoinHandle<Result<T, FetchError>>) -> Result<T> {
    match task.await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => {
            error!(feed, %err, "fetch failed");
            Err(anyhow::Error::new(err).context(format!("failed to fetch {feed}")))
        }
        Err(join_err) => Err(anyhow!("{feed} fetch task failed: {join_err}")),
    }
}
