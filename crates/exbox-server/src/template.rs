//! HTML template for example pages.

use std::fmt::Write;

/// Sandbox policy of the embedded example frame.
pub(crate) const IFRAME_SANDBOX: &str =
    "allow-forms allow-modals allow-popups allow-presentation allow-same-origin allow-scripts";

/// Path of the one-shot color scheme script.
pub(crate) const COLOR_SCHEME_SCRIPT_PATH: &str = "/assets/color-scheme.js";

/// Data for an outbound link.
pub(crate) struct LinkData<'a> {
    pub(crate) label: &'a str,
    pub(crate) href: &'a str,
    /// Rewritten by the color scheme script.
    pub(crate) themed: bool,
}

/// All data needed to render an example page.
pub(crate) struct ExamplePageData<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) heading: &'a str,
    pub(crate) theme: &'a str,
    pub(crate) links: Vec<LinkData<'a>>,
    pub(crate) frame_src: &'a str,
    pub(crate) frame_title: String,
}

/// Render a complete example page.
pub(crate) fn render_example_page(page: &ExamplePageData<'_>) -> String {
    let mut html = String::with_capacity(4096);

    // DOCTYPE and head
    let _ = writeln!(html, "<!DOCTYPE html>\n<html lang=\"en\" class=\"{}\">", escape(page.theme));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(page.title));
    render_seo(&mut html, page.title, page.description);
    html.push_str("<style>\n");
    html.push_str("body { margin: 0; font-family: system-ui, sans-serif; }\n");
    html.push_str("html.dark body { background: #000; color: #e5e7eb; }\n");
    html.push_str(".page { display: flex; flex-direction: column; height: 100vh; }\n");
    html.push_str(".header { padding: 1.5rem; }\n");
    html.push_str(".links { display: flex; gap: 1rem; flex-wrap: wrap; font-size: 0.75rem; }\n");
    html.push_str(".links a { color: inherit; }\n");
    html.push_str(".frame { flex: 1; display: flex; padding: 0 1.5rem 4rem; min-height: 0; }\n");
    html.push_str(".frame iframe { flex: 1; width: 100%; border: 0; border-radius: 0.5rem; }\n");
    html.push_str("</style>\n");
    let _ = writeln!(
        html,
        "<script src=\"{COLOR_SCHEME_SCRIPT_PATH}\" defer></script>"
    );
    html.push_str("</head>\n<body>\n<div class=\"page\">\n");

    // Title and outbound links
    html.push_str("<div class=\"header\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(page.heading));
    html.push_str("<div class=\"links\">\n");
    for link in &page.links {
        let themed = if link.themed { " data-sandbox-link" } else { "" };
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\"{themed}>{}</a>",
            escape(link.href),
            escape(link.label),
        );
    }
    html.push_str("</div>\n</div>\n");

    // Embedded sandbox
    html.push_str("<div class=\"frame\">\n");
    let _ = writeln!(
        html,
        "<iframe src=\"{}\" title=\"{}\" sandbox=\"{IFRAME_SANDBOX}\" data-sandbox-link></iframe>",
        escape(page.frame_src),
        escape(&page.frame_title),
    );
    html.push_str("</div>\n");

    html.push_str("</div>\n</body>\n</html>");
    html
}

/// Render title and description meta tags for search engines and previews.
fn render_seo(html: &mut String, title: &str, description: &str) {
    let title = escape(title);
    let description = escape(description);
    let _ = writeln!(html, "<meta name=\"description\" content=\"{description}\">");
    let _ = writeln!(html, "<meta name=\"twitter:title\" content=\"{title}\">");
    let _ = writeln!(
        html,
        "<meta name=\"twitter:description\" content=\"{description}\">"
    );
    html.push_str("<meta property=\"og:type\" content=\"website\">\n");
    let _ = writeln!(html, "<meta property=\"og:title\" content=\"{title}\">");
    let _ = writeln!(
        html,
        "<meta property=\"og:description\" content=\"{description}\">"
    );
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
