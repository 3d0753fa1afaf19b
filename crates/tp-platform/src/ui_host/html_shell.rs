//! Renders the application shell page.
//!
//! Registered assets are collected in memory; mounting writes `index.html`
//! with every stylesheet, the icon fonts and the mount element carrying the
//! root component's wiring as data attributes.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tp_core::ports::{AssetHostPort, UiHostPort};
use tp_core::{AssetError, IconFont, MountError, MountTarget, RootComponent, Stylesheet};
use tracing::info;

pub const INDEX_FILE_NAME: &str = "index.html";
pub const DEFAULT_FONT_BASE: &str = "/node_modules";

const PAGE_TITLE: &str = "Travel Planner";

#[derive(Debug, Default)]
struct ShellState {
    stylesheets: Vec<Stylesheet>,
    icon_fonts: Vec<IconFont>,
    mounted: Option<MountTarget>,
}

pub struct HtmlShellHost {
    output_dir: PathBuf,
    state: Mutex<ShellState>,
}

impl HtmlShellHost {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            state: Mutex::new(ShellState::default()),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE_NAME)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn render(&self, state: &ShellState, target: &MountTarget, root: &RootComponent) -> String {
        let mut head = String::new();
        for stylesheet in &state.stylesheets {
            match stylesheet {
                Stylesheet::Linked { href } => {
                    let _ = writeln!(
                        head,
                        r#"    <link rel="stylesheet" href="{}">"#,
                        escape_attr(href)
                    );
                }
                Stylesheet::Inline { id, css } => {
                    let _ = writeln!(
                        head,
                        "    <style id=\"{}\">\n{}    </style>",
                        escape_attr(id),
                        css.replace("</", "<\\/")
                    );
                }
            }
        }
        for font in &state.icon_fonts {
            let _ = writeln!(
                head,
                r#"    <link rel="stylesheet" href="{}/{}/src/{}/style.css">"#,
                DEFAULT_FONT_BASE,
                escape_attr(&font.package),
                escape_attr(&font.weight)
            );
        }

        let patched = serde_json::to_string(root.patched_defaults())
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{head}  </head>
  <body>
    <div id="{id}" data-root="{name}" data-project="{project}" data-auth-domain="{auth_domain}" data-documents="{documents}"></div>
    <script type="application/json" id="map-icon-defaults">{patched}</script>
  </body>
</html>
"#,
            title = PAGE_TITLE,
            id = escape_attr(target.element_id()),
            name = escape_attr(root.name()),
            project = escape_attr(root.service().project_id()),
            auth_domain = escape_attr(root.service().auth_domain()),
            documents = escape_attr(&root.service().documents_path()),
        )
    }
}

#[async_trait]
impl AssetHostPort for HtmlShellHost {
    async fn register_stylesheet(&self, stylesheet: &Stylesheet) -> Result<(), AssetError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.stylesheets.iter().any(|s| s.key() == stylesheet.key()) {
            state.stylesheets.push(stylesheet.clone());
        }
        Ok(())
    }

    async fn register_icon_font(&self, font: &IconFont) -> Result<(), AssetError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if !state.icon_fonts.contains(font) {
            state.icon_fonts.push(font.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl UiHostPort for HtmlShellHost {
    async fn mount(&self, target: &MountTarget, root: RootComponent) -> Result<(), MountError> {
        let html = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = &state.mounted {
                return Err(MountError::AlreadyMounted {
                    target: existing.to_string(),
                });
            }
            let html = self.render(&state, target, &root);
            state.mounted = Some(target.clone());
            html
        };

        let index = self.index_path();
        let written = async {
            tokio::fs::create_dir_all(&self.output_dir).await?;
            tokio::fs::write(&index, html).await
        }
        .await;

        if let Err(err) = written {
            self.state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .mounted = None;
            return Err(MountError::Host(format!(
                "failed to write {}: {err}",
                index.display()
            )));
        }

        info!(path = %index.display(), target = %target, "Application shell written");
        Ok(())
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(
            escape_attr(r#"a"b<c>&'d"#),
            "a&quot;b&lt;c&gt;&amp;&#39;d"
        );
    }
}
