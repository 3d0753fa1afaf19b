mod headless;
mod html_shell;

pub use headless::HeadlessUiHost;
pub use html_shell::{HtmlShellHost, DEFAULT_FONT_BASE, INDEX_FILE_NAME};
