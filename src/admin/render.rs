//! Minimal HTML for the admin views. Every interpolated value goes through `escape`.

use super::store::TextRow;
use super::{AdminView, VIEWS};
use std::fmt::Write;

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn page(title: &str, body: &str) -> String {
    let mut nav = String::new();
    for v in VIEWS {
        let _ = write!(nav, r#"<a href="/admin/{}">{}</a> "#, v.path, escape(v.label));
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title} | EngagED Admin</title></head>\n\
         <body><nav><a href=\"/admin\">EngagED Admin</a> | {nav}</nav><h1>{title}</h1>\n{body}</body></html>\n",
        title = escape(title),
        nav = nav,
        body = body,
    )
}

pub fn render_index() -> String {
    let mut body = String::from("<ul>");
    for v in VIEWS {
        let _ = write!(body, r#"<li><a href="/admin/{}">{}</a></li>"#, v.path, escape(v.label));
    }
    body.push_str("</ul>");
    page("Dashboard", &body)
}

pub fn render_table(view: &AdminView, rows: &[TextRow], skip: i64, limit: i64) -> String {
    let mut body = String::new();
    let _ = write!(body, r#"<p><a href="/admin/{}/new">New</a></p>"#, view.path);
    body.push_str("<table border=\"1\"><thead><tr><th>ID</th>");
    for c in view.columns {
        let _ = write!(body, "<th>{}</th>", escape(c.label));
    }
    body.push_str("<th></th></tr></thead><tbody>");
    for row in rows {
        let id = row.first().cloned().flatten().unwrap_or_default();
        body.push_str("<tr>");
        for cell in row {
            let _ = write!(body, "<td>{}</td>", escape(cell.as_deref().unwrap_or("")));
        }
        let _ = write!(
            body,
            r#"<td><a href="/admin/{path}/{id}/edit">Edit</a> <form method="post" action="/admin/{path}/{id}/delete" style="display:inline"><button type="submit">Delete</button></form></td>"#,
            path = view.path,
            id = escape(&id),
        );
        body.push_str("</tr>");
    }
    body.push_str("</tbody></table>");
    if skip > 0 {
        let prev = (skip - limit).max(0);
        let _ = write!(body, r#"<a href="/admin/{}?skip={}&amp;limit={}">Previous</a> "#, view.path, prev, limit);
    }
    if rows.len() as i64 == limit {
        let _ = write!(body, r#"<a href="/admin/{}?skip={}&amp;limit={}">Next</a>"#, view.path, skip + limit, limit);
    }
    page(view.label, &body)
}

/// Create form when `row` is `None`, edit form otherwise (`row[0]` is the id).
pub fn render_form(view: &AdminView, row: Option<&TextRow>) -> String {
    let (title, action) = match row.and_then(|r| r.first().cloned().flatten()) {
        Some(id) => (format!("Edit {} #{}", view.label, id), format!("/admin/{}/{}/edit", view.path, escape(&id))),
        None => (format!("New {}", view.label), format!("/admin/{}/new", view.path)),
    };
    let mut body = format!(r#"<form method="post" action="{}">"#, action);
    for (i, c) in view.columns.iter().enumerate() {
        let value = row
            .and_then(|r| r.get(i + 1).cloned().flatten())
            .unwrap_or_default();
        let _ = write!(
            body,
            r#"<p><label>{label} <input type="text" name="{name}" value="{value}"></label></p>"#,
            label = escape(c.label),
            name = c.name,
            value = escape(&value),
        );
    }
    body.push_str(r#"<button type="submit">Save</button></form>"#);
    page(&title, &body)
}
