//! Embeddable GitHub repository card.
//!
//! [`create`] fetches a repository's metadata, language breakdown and,
//! with a token, its 14-day traffic, then mounts a themed HTML card into a
//! [`Document`].

pub mod dom;
pub mod error;
pub mod format;
pub mod github;
pub mod icons;
pub mod languages;
pub mod markup;
pub mod render;
pub mod styles;
pub mod theme;
pub mod widget;

pub use dom::{Document, ElementId, MemoryDocument};
pub use error::{Error, Result};
pub use format::{escape_markup, format_count};
pub use github::{
    fetch_repository_data, FetchResult, GithubClient, ReqwestTransport, Transport,
    DEFAULT_API_URL,
};
pub use languages::{language_color, DEFAULT_LANGUAGE_COLOR, LANGUAGE_COLORS};
pub use render::render_widget;
pub use styles::ensure_styles_injected;
pub use theme::Theme;
pub use widget::{create, Container, WidgetOptions};

pub const VERSION: &str = "1.0.0";
