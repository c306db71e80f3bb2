//! Server-rendered widget page.
//!
//! The page is a plain GET form: the text field, two submit buttons and two
//! checkboxes that resubmit on change. Everything shown (badge, banner,
//! chart, table) comes from one [`View`].

use crate::controller::{Controller, View};
use rainwater_render::svg::escape;
use rainwater_render::{ChartTheme, HEADERS};
use std::fmt::Write;

/// Render the full HTML document for the controller's current state.
#[must_use]
pub fn render_page(controller: &Controller) -> String {
    let view = controller.view();
    let options = controller.options();
    let theme = &controller.style().theme;

    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Water Tank</title>\n");
    html.push_str(&stylesheet(theme));
    html.push_str("</head>\n<body>\n<main>\n<h1>Water Tank</h1>\n");

    let _ = write!(
        html,
        concat!(
            "<form method=\"get\" action=\"/\">\n",
            "<label for=\"heightsInput\">Heights</label>\n",
            "<input id=\"heightsInput\" name=\"heights\" value=\"{input}\" ",
            "placeholder=\"[0,4,0,0,0,6,0,6,4,0]\" autocomplete=\"off\">\n",
            "<button id=\"computeBtn\" name=\"action\" value=\"compute\">Compute</button>\n",
            "<button id=\"exampleBtn\" name=\"action\" value=\"example\">Load example</button>\n",
            "<label><input id=\"gridToggle\" type=\"checkbox\" name=\"grid\"{grid} ",
            "onchange=\"this.form.submit()\"> Grid</label>\n",
            "<label><input id=\"labelsToggle\" type=\"checkbox\" name=\"labels\"{labels} ",
            "onchange=\"this.form.submit()\"> Labels</label>\n",
            "</form>\n"
        ),
        input = escape(controller.input()),
        grid = checked(options.show_grid),
        labels = checked(options.show_labels),
    );

    render_result(&mut html, view);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_result(html: &mut String, view: &View) {
    let _ = writeln!(
        html,
        "<p>Total trapped water: <span id=\"resultBadge\" class=\"badge\">{}</span></p>",
        escape(&view.badge)
    );

    match &view.error {
        Some(message) => {
            let _ = writeln!(
                html,
                "<div id=\"error\" class=\"error\" role=\"alert\">{}</div>",
                escape(message)
            );
        }
        None => html.push_str("<div id=\"error\" class=\"error\" role=\"alert\" hidden></div>\n"),
    }

    if view.is_ok() {
        let _ = writeln!(
            html,
            "<p id=\"basins\">{}</p>",
            escape(&view.breakdown.basin_summary())
        );
    }

    html.push_str("<div id=\"viz\">\n");
    if let Some(svg) = view.svg() {
        html.push_str(&svg);
    }
    html.push_str("</div>\n");

    html.push_str("<table id=\"breakdown\">\n<thead><tr>");
    for header in HEADERS {
        let _ = write!(html, "<th>{header}</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    html.push_str(&view.breakdown.to_html_rows());
    html.push_str("</tbody>\n</table>\n");
}

const fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn stylesheet(theme: &ChartTheme) -> String {
    format!(
        concat!(
            "<style>\n",
            ":root {{ --water: {water}; --block: {block}; --text: {text}; ",
            "--page: {page}; --error: {error}; }}\n",
            "body {{ background: var(--page); color: var(--text); ",
            "font-family: system-ui, sans-serif; margin: 0; }}\n",
            "main {{ max-width: 960px; margin: 0 auto; padding: 24px; }}\n",
            "form {{ display: flex; flex-wrap: wrap; gap: 8px; align-items: center; }}\n",
            "#heightsInput {{ flex: 1; min-width: 240px; font-family: monospace; }}\n",
            ".badge {{ font-weight: 600; color: var(--water); }}\n",
            ".error {{ color: var(--error); margin: 8px 0; }}\n",
            "#viz svg {{ max-width: 100%; height: auto; }}\n",
            "table {{ border-collapse: collapse; margin-top: 16px; }}\n",
            "th, td {{ padding: 4px 10px; text-align: right; }}\n",
            "</style>\n"
        ),
        water = theme.water.to_css(),
        block = theme.block.to_css(),
        text = theme.text.to_css(),
        page = theme.page.to_css(),
        error = theme.error.to_css(),
    )
}
