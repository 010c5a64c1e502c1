//! Optional project cards loaded from the GitHub repository listing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Disabled unless `projects.enabled` is set in the site config. When on,
//! the browser layer fetches [`repos_endpoint`], decodes a list of
//! [`Repository`] records and hands them to [`render_cards`]. The new cards
//! carry the fade-in marker and are registered with the reveal observer by
//! the caller.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures surface as [`LoadError`] and are only logged. Cards are
//! assembled node by node with text content, never from an HTML string, so
//! repository names and descriptions cannot inject markup.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Deserialize;

use crate::config::ProjectsConfig;
use crate::view::View;

const NO_DESCRIPTION: &str = "No description available";

/// Repository fields read from the GitHub API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("repository request failed: {0}")]
    Request(String),
    #[error("repository request returned status {0}")]
    Status(u16),
    #[error("repository list could not be decoded: {0}")]
    Decode(String),
    #[error("not a GitHub login: {0:?}")]
    InvalidUsername(String),
}

/// Card contents derived from one repository.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ProjectCard {
    #[must_use]
    pub fn from_repository(repo: &Repository) -> Self {
        let description = repo
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_owned();

        let mut tags = Vec::with_capacity(2);
        if let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            tags.push(language.to_owned());
        }
        tags.push(format!("⭐ {}", repo.stargazers_count));

        Self {
            title: repo.name.clone(),
            url: repo.html_url.clone(),
            description,
            tags,
        }
    }
}

const MAX_LOGIN_LEN: usize = 39;

/// Whether `login` is a bare GitHub login: 1 to 39 ASCII alphanumerics or
/// single hyphens, not starting or ending with a hyphen.
#[must_use]
pub fn is_valid_login(login: &str) -> bool {
    (1..=MAX_LOGIN_LEN).contains(&login.len())
        && login.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !login.starts_with('-')
        && !login.ends_with('-')
        && !login.contains("--")
}

/// Listing URL for the configured account, most recently updated first.
///
/// # Errors
///
/// Returns [`LoadError::InvalidUsername`] when the configured username is
/// not a bare login, so nothing from the config is spliced into the path
/// unchecked.
pub fn repos_endpoint(config: &ProjectsConfig) -> Result<String, LoadError> {
    if !is_valid_login(&config.username) {
        return Err(LoadError::InvalidUsername(config.username.clone()));
    }
    Ok(format!(
        "{}/users/{}/repos?sort=updated&per_page={}",
        config.api_base.trim_end_matches('/'),
        config.username,
        config.per_page
    ))
}

/// Cards for every non-fork repository, in listing order.
#[must_use]
pub fn cards(repos: &[Repository]) -> Vec<ProjectCard> {
    repos
        .iter()
        .filter(|repo| !repo.fork)
        .map(ProjectCard::from_repository)
        .collect()
}

/// Append `cards` to the projects grid and return the new card elements.
///
/// Returns an empty list when the page has no grid.
pub fn render_cards<V: View>(view: &V, config: &ProjectsConfig, cards: &[ProjectCard]) -> Vec<V::Node> {
    let Some(grid) = view.query(&config.grid_selector) else {
        return Vec::new();
    };
    cards
        .iter()
        .filter_map(|card| {
            let node = build_card(view, card)?;
            view.append_child(&grid, &node);
            Some(node)
        })
        .collect()
}

fn build_card<V: View>(view: &V, card: &ProjectCard) -> Option<V::Node> {
    let root = element(view, "div", "project-card fade-in")?;

    let header = element(view, "div", "project-header")?;
    let title = view.create_element("h3")?;
    view.set_text(&title, &card.title);
    view.append_child(&header, &title);

    let link = element(view, "a", "project-link")?;
    view.set_attribute(&link, "href", &card.url);
    view.set_attribute(&link, "target", "_blank");
    view.set_attribute(&link, "rel", "noopener noreferrer");
    view.set_attribute(&link, "aria-label", &format!("Open {} on GitHub", card.title));
    view.set_text(&link, "↗");
    view.append_child(&header, &link);
    view.append_child(&root, &header);

    let description = element(view, "p", "project-description")?;
    view.set_text(&description, &card.description);
    view.append_child(&root, &description);

    let tags = element(view, "div", "project-tags")?;
    for label in &card.tags {
        let tag = element(view, "span", "tag")?;
        view.set_text(&tag, label);
        view.append_child(&tags, &tag);
    }
    view.append_child(&root, &tags);

    Some(root)
}

fn element<V: View>(view: &V, tag: &str, classes: &str) -> Option<V::Node> {
    let node = view.create_element(tag)?;
    for class in classes.split_whitespace() {
        view.add_class(&node, class);
    }
    Some(node)
}
