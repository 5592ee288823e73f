use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use repo_widget::{create, GithubClient, MemoryDocument, Theme, WidgetOptions};
use std::fs;
use std::path::Path;

const MOUNT_ID: &str = "gh-widget";

#[derive(Parser)]
#[command(name = "repo-widget")]
#[command(about = "Render a GitHub repository card as a standalone HTML page")]
struct Args {
    /// Repository owner (user or organization)
    owner: String,

    /// Repository name
    repo: String,

    /// GitHub token; enables traffic statistics (needs push access)
    #[arg(short, long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "assets")]
    output: String,

    /// Only render this theme (both by default)
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    /// REST API root, for GitHub Enterprise hosts
    #[arg(long, default_value = repo_widget::DEFAULT_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let client = GithubClient::new().with_base_url(&args.api_url);

    let output_path = Path::new(&args.output);
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create output directory {}", args.output))?;

    let themes = match args.theme {
        Some(theme) => vec![theme],
        None => Theme::ALL.to_vec(),
    };

    for theme in themes {
        let doc = MemoryDocument::new();
        doc.append_element(MOUNT_ID);

        let mut options =
            WidgetOptions::new(format!("#{}", MOUNT_ID), &args.owner, &args.repo).with_theme(theme);
        if let Some(token) = &args.token {
            options = options.with_token(token.as_str());
        }

        create(&doc, &client, &options)
            .await
            .with_context(|| format!("Failed to render {}/{}", args.owner, args.repo))?;

        let filename = output_path.join(format!("widget_{}.html", theme.name()));
        let title = format!("{}/{}", args.owner, args.repo);
        fs::write(&filename, doc.to_html_page(&title))
            .with_context(|| format!("Failed to write {}", filename.display()))?;

        info!("Generated {} theme widget: {}", theme, filename.display());
    }

    Ok(())
}
