//! Repository listing fetch for the optional project loader.

use std::rc::Rc;

use super::DomView;
use super::observer::RevealObserver;
use crate::config::ProjectsConfig;
use crate::controllers::projects::{LoadError, Repository, cards, render_cards, repos_endpoint};

/// Fetch the repository list. No retry and no timeout beyond the browser's.
///
/// # Errors
///
/// Returns [`LoadError`] on transport failure, a non-2xx status, or a body
/// that is not a repository list.
pub async fn fetch_repositories(url: &str) -> Result<Vec<Repository>, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(LoadError::Status(status));
    }
    resp.json::<Vec<Repository>>()
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))
}

/// Load cards in the background and hand new ones to the reveal observer.
pub fn spawn_loader(view: Rc<DomView>, config: ProjectsConfig, observer: Option<RevealObserver>) {
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = match repos_endpoint(&config) {
            Ok(url) => fetch_repositories(&url).await,
            Err(err) => Err(err),
        };
        match loaded {
            Ok(repos) => {
                let nodes = render_cards(view.as_ref(), &config, &cards(&repos));
                if let Some(observer) = &observer {
                    observer.observe(&nodes);
                }
                log::info!("loaded {} project card(s)", nodes.len());
            }
            Err(err) => log::error!("error loading GitHub projects: {err}"),
        }
    });
}
