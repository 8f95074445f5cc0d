//! Server-rendered standings page.

use outturn::projects::RankedProject;

const PAGE_STYLE: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 2rem auto; max-width: 64rem; color: #1d2733; }\n\
h1 { font-size: 1.4rem; }\n\
table { border-collapse: collapse; width: 100%; }\n\
th, td { border-bottom: 1px solid #d4dbe3; padding: 0.45rem 0.6rem; text-align: left; }\n\
th { background: #f0f3f7; }\n\
td.num { text-align: right; font-variant-numeric: tabular-nums; }\n\
tr.unfinished td { color: #7a8694; }\n\
p.error { color: #a13232; }\n";

/// Render the full standings table.
///
/// Unrated records show a placeholder in the rating columns instead of a
/// number; nothing on this page recomputes scores.
pub(crate) fn render_standings(standings: &[RankedProject]) -> String {
    let mut html = String::with_capacity(2_048 + standings.len() * 512);
    push_header(&mut html, "Construction project standings");
    html.push_str("<table>\n<thead>\n<tr>");
    for column in [
        "#",
        "Project",
        "Status",
        "Cost deviation",
        "Duration deviation",
        "Cost rating",
        "Duration rating",
        "Final rating",
        "Submitted",
    ] {
        html.push_str("<th>");
        html.push_str(column);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if standings.is_empty() {
        html.push_str("<tr><td colspan=\"9\">No projects recorded yet.</td></tr>\n");
    }

    for entry in standings {
        let record = &entry.project;
        let row_class = if record.is_completed {
            ""
        } else {
            " class=\"unfinished\""
        };
        let status = if record.is_completed {
            "Completed"
        } else {
            "In progress"
        };

        let (cost_rating, duration_rating, final_rating) = match record.ratings {
            Some(ratings) => (
                ratings.cost_rating.to_string(),
                ratings.duration_rating.to_string(),
                format!("{:.1}", ratings.final_rating),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        html.push_str(&format!(
            "<tr{row_class}><td class=\"num\">{position}</td><td>{name}</td><td>{status}</td>\
             <td class=\"num\">{cost_deviation}</td><td class=\"num\">{duration_deviation}</td>\
             <td class=\"num\">{cost_rating}</td><td class=\"num\">{duration_rating}</td>\
             <td class=\"num\">{final_rating}</td><td>{submitted}</td></tr>\n",
            position = entry.position,
            name = escape(&record.name),
            cost_deviation = record.cost_deviation,
            duration_deviation = record.duration_deviation,
            submitted = record.created_at.format("%Y-%m-%d"),
        ));
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

pub(crate) fn render_error(message: &str) -> String {
    let mut html = String::with_capacity(512);
    push_header(&mut html, "Construction project standings");
    html.push_str("<p class=\"error\">");
    html.push_str(&escape(message));
    html.push_str("</p>\n</body>\n</html>\n");
    html
}

fn push_header(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str("<style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
}

/// Minimal HTML entity escaping for untrusted project names.
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
