use log::debug;

use crate::dom::{Document, ElementId};
use crate::error::{Error, Result};
use crate::github::{fetch_repository_data, GithubClient, Transport};
use crate::render::{render_error, render_loading, render_widget};
use crate::styles::ensure_styles_injected;
use crate::theme::Theme;

/// Where the widget is mounted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Element(ElementId),
    /// CSS selector; the first match is used
    Selector(String),
}

impl From<ElementId> for Container {
    fn from(element: ElementId) -> Self {
        Container::Element(element)
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Container::Selector(selector.to_string())
    }
}

impl From<String> for Container {
    fn from(selector: String) -> Self {
        Container::Selector(selector)
    }
}

/// Options for [`create`]
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    pub container: Container,
    pub owner: String,
    pub repo: String,
    pub theme: Theme,
    /// Enables traffic statistics and raises the API rate limit
    pub token: Option<String>,
}

impl WidgetOptions {
    pub fn new(container: impl Into<Container>, owner: &str, repo: &str) -> Self {
        Self {
            container: container.into(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            theme: Theme::default(),
            token: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(Error::InvalidOptions("owner is required".to_string()));
        }
        if self.repo.trim().is_empty() {
            return Err(Error::InvalidOptions("repo is required".to_string()));
        }
        Ok(())
    }
}

fn resolve_container<D: Document + ?Sized>(doc: &D, container: &Container) -> Result<ElementId> {
    let element = match container {
        Container::Element(element) => Some(*element).filter(|e| doc.contains_element(*e)),
        Container::Selector(selector) => doc.query_selector(selector),
    };
    element.ok_or(Error::ContainerNotFound)
}

/// Mount a repository widget into `doc`.
///
/// Fails only when the options are invalid or the container cannot be
/// resolved; both are checked before any request is made. Fetch failures
/// are rendered inside the widget and the call still returns `Ok`.
pub async fn create<D, T>(doc: &D, client: &GithubClient<T>, options: &WidgetOptions) -> Result<()>
where
    D: Document + ?Sized,
    T: Transport,
{
    ensure_styles_injected(doc);

    options.validate()?;
    let element = resolve_container(doc, &options.container)?;

    doc.set_inner_html(element, render_loading(options.theme));

    let fetched = fetch_repository_data(
        client,
        &options.owner,
        &options.repo,
        options.token.as_deref(),
    )
    .await;

    let html = match fetched {
        Ok(data) => render_widget(&data, options.theme),
        Err(e) => {
            debug!(
                "Rendering error state for {}/{}: {}",
                options.owner, options.repo, e
            );
            render_error(&e.to_string(), options.theme)
        }
    };
    doc.set_inner_html(element, html);

    Ok(())
}
