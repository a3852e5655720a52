//! Server-side HTML rendering.
//!
//! Pages are small enough that plain string building is clearer than a
//! template engine. Every value that comes from the feed is escaped.

use std::fmt::Write;

use bookshelf_core::Entry;

const TITLE: &str = "Bookshelf";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full index page: category nav plus the list for `current`.
pub fn index_page(categories: &[String], current: &str, entries: &[impl AsRef<Entry>]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", TITLE);
    html.push_str("<link rel=\"stylesheet\" href=\"/static/style.css\">\n");
    html.push_str("<script src=\"/static/bookshelf.js\" defer></script>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&nav(categories, current));
    html.push_str("<main>\n<section id=\"books\">\n");
    html.push_str(&books_fragment(entries));
    html.push_str("</section>\n<aside id=\"book\"></aside>\n</main>\n");
    html.push_str("</body>\n</html>\n");
    html
}

fn nav(categories: &[String], current: &str) -> String {
    let mut html = String::from("<nav>\n");
    let _ = writeln!(html, "<a class=\"brand\" href=\"/\">{}</a>", TITLE);
    html.push_str("<ul>\n");

    let all_class = if current.is_empty() { " class=\"active\"" } else { "" };
    let _ = writeln!(
        html,
        "<li><a{} href=\"/\" data-category=\"\">All</a></li>",
        all_class
    );

    for category in categories {
        let class = if category == current { " class=\"active\"" } else { "" };
        let _ = writeln!(
            html,
            "<li><a{} href=\"/?cat={}\" data-category=\"{}\">{}</a></li>",
            class,
            urlencoding::encode(category),
            escape(category),
            escape(category)
        );
    }

    html.push_str("</ul>\n</nav>\n");
    html
}

/// List fragment for `/module/books`.
pub fn books_fragment(entries: &[impl AsRef<Entry>]) -> String {
    if entries.is_empty() {
        return "<p class=\"empty\">No publications available yet.</p>\n".to_string();
    }

    let mut html = String::from("<ul class=\"books\">\n");
    for entry in entries {
        let entry = entry.as_ref();
        let locked = if entry.is_locked() { " locked" } else { "" };
        let _ = writeln!(
            html,
            "<li class=\"book{locked}\"><a href=\"/module/book/{id}\" data-book=\"{id}\">\
             <img src=\"{cover}\" alt=\"{title}\" loading=\"lazy\">\
             <span class=\"title\">{title}</span></a></li>",
            locked = locked,
            id = escape(&entry.id),
            cover = escape(&entry.cover),
            title = escape(&entry.title),
        );
    }
    html.push_str("</ul>\n");
    html
}

/// Detail fragment for `/module/book/{id}`.
pub fn book_fragment(entry: &Entry) -> String {
    let mut html = String::from("<article class=\"book-info\">\n");
    let _ = writeln!(
        html,
        "<img src=\"{}\" alt=\"{}\">",
        escape(&entry.cover),
        escape(&entry.title)
    );
    let _ = writeln!(html, "<h2>{}</h2>", escape(&entry.title));
    let _ = writeln!(
        html,
        "<p class=\"category\">{}</p>",
        escape(&entry.category)
    );
    let _ = writeln!(
        html,
        "<p class=\"description\">{}</p>",
        escape(&entry.description)
    );
    if entry.is_locked() {
        html.push_str("<span class=\"badge locked\">Locked</span>\n");
    } else {
        let _ = writeln!(
            html,
            "<a class=\"download\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Download PDF</a>",
            escape(&entry.link)
        );
    }
    html.push_str("</article>\n");
    html
}
