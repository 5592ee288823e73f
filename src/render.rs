use crate::format::format_count;
use crate::github::{FetchResult, RepositoryRecord, TrafficSummary};
use crate::icons;
use crate::languages::{language_color, language_percentages, LanguagePercentage};
use crate::markup::Markup;
use crate::theme::Theme;

pub const LOADING_MESSAGE: &str = "Loading repository...";
pub const TRAFFIC_TITLE: &str = "Traffic (last 14 days)";
pub const FOOTER_TEXT: &str = "Powered by GitHub API";

/// Render the repository card
pub fn render_widget(data: &FetchResult, theme: Theme) -> String {
    let repo = &data.repository;
    let languages = language_percentages(&data.languages);

    let mut m = Markup::new();
    m.el("div", &[("class", theme.root_class())], |m| {
        render_header(m, repo);
        // kept even when empty; the stylesheet collapses it
        m.text_el(
            "div",
            &[("class", "gh-widget-description")],
            repo.description.as_deref().unwrap_or(""),
        );
        render_stats(m, repo);
        if !languages.is_empty() {
            render_languages(m, &languages);
        }
        if let Some(traffic) = &data.traffic {
            render_traffic(m, traffic);
        }
        render_footer(m);
    });
    m.finish()
}

/// Placeholder shown while the repository is fetched
pub fn render_loading(theme: Theme) -> String {
    let mut m = Markup::new();
    m.el("div", &[("class", theme.root_class())], |m| {
        m.text_el("div", &[("class", "gh-widget-loading")], LOADING_MESSAGE);
    });
    m.finish()
}

pub fn render_error(message: &str, theme: Theme) -> String {
    let mut m = Markup::new();
    m.el("div", &[("class", theme.root_class())], |m| {
        m.text_el("div", &[("class", "gh-widget-error")], message);
    });
    m.finish()
}

fn render_header(m: &mut Markup, repo: &RepositoryRecord) {
    m.el("div", &[("class", "gh-widget-header")], |m| {
        m.void(
            "img",
            &[
                ("class", "gh-widget-avatar"),
                ("src", repo.owner.avatar_url.as_str()),
                ("alt", repo.owner.login.as_str()),
                ("loading", "lazy"),
            ],
        );
        m.el("div", &[("class", "gh-widget-title-section")], |m| {
            m.text_el(
                "a",
                &[
                    ("class", "gh-widget-repo-link"),
                    ("href", repo.html_url.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                &repo.name,
            );
            m.text_el("div", &[("class", "gh-widget-owner")], &repo.owner.login);
        });
    });
}

fn render_stats(m: &mut Markup, repo: &RepositoryRecord) {
    m.el("div", &[("class", "gh-widget-stats")], |m| {
        stat(m, icons::STAR, repo.stargazers_count, "stars");
        stat(m, icons::FORK, repo.forks_count, "forks");
        if repo.open_issues_count > 0 {
            stat(m, icons::ISSUE, repo.open_issues_count, "issues");
        }
    });
}

fn stat(m: &mut Markup, icon: &'static str, value: u64, label: &str) {
    m.el("div", &[("class", "gh-widget-stat")], |m| {
        m.trusted(icon);
        m.text_el("span", &[("class", "gh-widget-stat-value")], &format_count(value));
        m.text(" ").text(label);
    });
}

fn render_languages(m: &mut Markup, languages: &[LanguagePercentage]) {
    m.el("div", &[("class", "gh-widget-languages")], |m| {
        m.el("div", &[("class", "gh-widget-lang-bar")], |m| {
            for lang in languages {
                let style = format!(
                    "width:{}%;background-color:{};",
                    lang.percent,
                    language_color(&lang.name)
                );
                let title = format!("{}: {}%", lang.name, lang.percent);
                m.el(
                    "div",
                    &[
                        ("class", "gh-widget-lang-segment"),
                        ("style", style.as_str()),
                        ("title", title.as_str()),
                    ],
                    |_| {},
                );
            }
        });
        m.el("div", &[("class", "gh-widget-lang-list")], |m| {
            for lang in languages {
                let dot_style = format!("background-color:{};", language_color(&lang.name));
                m.el("div", &[("class", "gh-widget-lang-item")], |m| {
                    m.el(
                        "span",
                        &[("class", "gh-widget-lang-dot"), ("style", dot_style.as_str())],
                        |_| {},
                    );
                    m.text_el("span", &[("class", "gh-widget-lang-name")], &lang.name);
                    m.text_el(
                        "span",
                        &[("class", "gh-widget-lang-percent")],
                        &format!("{}%", lang.percent),
                    );
                });
            }
        });
    });
}

fn render_traffic(m: &mut Markup, traffic: &TrafficSummary) {
    m.el("div", &[("class", "gh-widget-traffic")], |m| {
        m.text_el("div", &[("class", "gh-widget-traffic-title")], TRAFFIC_TITLE);
        m.el("div", &[("class", "gh-widget-traffic-stats")], |m| {
            traffic_item(
                m,
                traffic.views,
                &format!("Views ({} unique)", traffic.unique_visitors),
            );
            traffic_item(
                m,
                traffic.clones,
                &format!("Clones ({} unique)", traffic.unique_cloners),
            );
        });
    });
}

fn traffic_item(m: &mut Markup, value: u64, label: &str) {
    m.el("div", &[("class", "gh-widget-traffic-item")], |m| {
        m.text_el("span", &[("class", "gh-widget-traffic-value")], &format_count(value));
        m.text_el("span", &[("class", "gh-widget-traffic-label")], label);
    });
}

fn render_footer(m: &mut Markup) {
    m.el("div", &[("class", "gh-widget-footer")], |m| {
        m.trusted(icons::GITHUB);
        m.text_el("span", &[], FOOTER_TEXT);
    });
}
