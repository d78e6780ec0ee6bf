//! Renders the final message body for a selected GIF.

use crate::domain::entities::DisplayMode;

/// Renders the message body for a selected GIF URL.
///
/// The header line is the caption when one was given, otherwise the search
/// phrase. `Embedded` wraps a Markdown image embed in a link to the same URL;
/// `FullUrl` emits the bare link. A non-empty attribution is appended as the
/// last line. Pure function; the display mode is fixed per deployment.
#[must_use]
pub fn render(
    mode: DisplayMode,
    keywords: &str,
    caption: &str,
    url: &str,
    attribution: &str,
) -> String {
    let header = if caption.is_empty() { keywords } else { caption };

    let body = match mode {
        DisplayMode::Embedded => format!("[![{keywords}]({url})]({url})"),
        DisplayMode::FullUrl => url.to_string(),
    };

    let mut message = format!("*{header}*\n{body}");
    if !attribution.is_empty() {
        message.push('\n');
        message.push_str(attribution);
    }
    message
}
