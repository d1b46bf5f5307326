use std::fs;
use std::path::{Path, PathBuf};

use leptos::prelude::*;
use thiserror::Error;

use crate::app::PortfolioPage;
use crate::content;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Couldn't write site snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the complete page as a standalone document, without any
/// hydration scripts, suitable for static hosting.
pub fn render_document() -> String {
    let profile = content::profile();
    let title = format!("Projects - {}", profile.headline);
    let description = profile.tagline.clone();
    let body = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=description />
                <title>{title}</title>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" href="/pkg/portfolio-site.css" />
            </head>
            <body class="font-sans">
                <PortfolioPage profile projects=content::projects() />
            </body>
        </html>
    }
    .to_html();
    format!("<!DOCTYPE html>{body}")
}

/// Writes the snapshot to `<out_dir>/index.html`, creating the directory
/// if needed, and returns the path of the written file.
pub fn write_site(out_dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join("index.html");
    fs::write(&path, render_document())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_complete_html() {
        let doc = render_document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<html lang=\"en\">"));
        assert!(doc.contains("</html>"));
    }

    #[test]
    fn test_document_contains_every_card() {
        let doc = render_document();
        let projects = content::projects();
        assert_eq!(doc.matches("project-card").count(), projects.len());
        for project in &projects {
            assert!(doc.contains(&project.title));
        }
    }

    #[test]
    fn test_document_is_deterministic() {
        assert_eq!(render_document(), render_document());
    }
}
