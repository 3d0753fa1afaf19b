//! Finds which theme tokens the project's sources actually use.
//!
//! Sources are selected with the theme `content` globs and searched for
//! utility classes such as `bg-primary`, `hover:text-accent-light/50` or
//! `shadow-premium`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tp_core::{ThemeConfig, ThemeRegistry, ThemeToken, TokenCategory};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: &[&str] = &["node_modules", ".git", "target", "dist"];

const COLOR_UTILITIES: &[&str] = &[
    "bg",
    "text",
    "border",
    "ring",
    "from",
    "via",
    "to",
    "fill",
    "stroke",
    "divide",
    "outline",
    "decoration",
    "placeholder",
    "accent",
    "caret",
];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid content glob `{pattern}`: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid utility pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reference counts per token, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub files_scanned: usize,
    pub references: BTreeMap<TokenCategory, BTreeMap<String, usize>>,
}

impl TokenUsage {
    pub fn count(&self, category: TokenCategory, name: &str) -> usize {
        self.references
            .get(&category)
            .and_then(|names| names.get(name))
            .copied()
            .unwrap_or(0)
    }

    fn record(&mut self, category: TokenCategory, name: &str) {
        *self
            .references
            .entry(category)
            .or_default()
            .entry(name.to_string())
            .or_insert(0) += 1;
    }

    /// Tokens defined in `theme` that no scanned file references.
    pub fn unused(&self, theme: &ThemeRegistry) -> Vec<ThemeToken> {
        theme
            .tokens()
            .filter(|token| self.count(token.category, &token.name) == 0)
            .collect()
    }
}

pub struct ContentScanner {
    patterns: Vec<Pattern>,
    utility: Regex,
}

impl ContentScanner {
    /// Compile `globs`, expanding `{a,b}` alternatives first. A leading `./`
    /// is ignored; patterns are matched against paths relative to the root.
    pub fn new(globs: &[String]) -> Result<Self, ScanError> {
        let mut patterns = Vec::new();
        for glob in globs {
            for expanded in expand_braces(glob) {
                let normalized = expanded.trim_start_matches("./");
                let pattern = Pattern::new(normalized).map_err(|source| ScanError::InvalidGlob {
                    pattern: glob.clone(),
                    source,
                })?;
                patterns.push(pattern);
            }
        }

        let utilities = COLOR_UTILITIES
            .iter()
            .chain(["shadow", "font"].iter())
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        let utility = Regex::new(&format!(
            r"(?:^|[^A-Za-z0-9_-])(?:[A-Za-z0-9_-]+:)*(?P<utility>{utilities})-(?P<name>[a-z0-9]+(?:-[a-z0-9]+)*)(?:/\d+)?"
        ))?;

        Ok(Self { patterns, utility })
    }

    pub fn from_theme_config(config: &ThemeConfig) -> Result<Self, ScanError> {
        Self::new(&config.content)
    }

    /// Files under `root` selected by the content globs, in walk order.
    pub fn matching_files(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::default()
        };

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative.to_string_lossy().replace('\\', "/");
            if self
                .patterns
                .iter()
                .any(|pattern| pattern.matches_with(&relative, options))
            {
                files.push(entry.path().to_path_buf());
            }
        }
        Ok(files)
    }

    pub fn scan(&self, root: &Path, theme: &ThemeRegistry) -> Result<TokenUsage, ScanError> {
        let mut usage = TokenUsage::default();
        for path in self.matching_files(root)? {
            let bytes = fs::read(&path).map_err(|source| ScanError::Read {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "Scanning for theme tokens");
            // Class names are ASCII; stray non-UTF-8 bytes do not stop the scan
            self.scan_source(&String::from_utf8_lossy(&bytes), theme, &mut usage);
            usage.files_scanned += 1;
        }

        info!(
            root = %root.display(),
            files = usage.files_scanned,
            "Theme content scan finished"
        );
        Ok(usage)
    }

    /// Count token references in one source text.
    pub fn scan_source(&self, source: &str, theme: &ThemeRegistry, usage: &mut TokenUsage) {
        for captures in self.utility.captures_iter(source) {
            let (Some(utility), Some(name)) = (captures.name("utility"), captures.name("name"))
            else {
                continue;
            };
            let name = name.as_str();
            let category = candidate_categories(utility.as_str())
                .iter()
                .copied()
                .find(|category| theme.get(*category, name).is_some());
            if let Some(category) = category {
                usage.record(category, name);
            }
        }
    }
}

fn candidate_categories(utility: &str) -> &'static [TokenCategory] {
    match utility {
        // `shadow-primary` colours a shadow
        "shadow" => &[TokenCategory::Shadow, TokenCategory::Color],
        "font" => &[TokenCategory::Font],
        _ => &[TokenCategory::Color],
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}

/// Expand `{a,b}` alternatives, including nested and repeated groups.
/// Unbalanced braces are left as written.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut close = None;
    let mut splits = Vec::new();
    for (offset, c) in pattern[open..].char_indices() {
        let index = open + offset;
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(index);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(index),
            _ => {}
        }
    }

    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut bounds = vec![open];
    bounds.extend(splits);
    bounds.push(close);

    bounds
        .windows(2)
        .flat_map(|pair| {
            let alternative = &pattern[pair[0] + 1..pair[1]];
            expand_braces(&format!("{prefix}{alternative}{suffix}"))
        })
        .collect()
}
