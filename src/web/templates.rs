//! Server-rendered pages for the web front end

use crate::models::book::Book;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}td,th{padding:.3rem .6rem;border-bottom:1px solid #ddd}\
.error{background:#fdd;border:1px solid #c00;padding:.5rem;margin-bottom:1rem}";

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
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

/// Listing page: creation form, one edit row per book, optional error banner
pub fn index(books: &[Book], error: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Bookshelf</title>\n<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<h1>Bookshelf</h1>\n");

    if let Some(message) = error {
        html.push_str(&format!("<div class=\"error\">{}</div>\n", escape_html(message)));
    }

    html.push_str("<h2>Add a book</h2>\n<form method=\"post\" action=\"/add\">\n");
    html.push_str(&book_fields(None));
    html.push_str("<button type=\"submit\">Add</button>\n</form>\n");

    html.push_str("<h2>Books</h2>\n");
    if books.is_empty() {
        html.push_str("<p>No books yet.</p>\n");
    } else {
        html.push_str("<table>\n<tr><th>ID</th><th>Details</th><th></th></tr>\n");
        for book in books {
            html.push_str(&book_row(book));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn book_row(book: &Book) -> String {
    let id = book.id;
    let fields = book_fields(Some(book));
    format!(
        "<tr>\n<td>{id}</td>\n<td><form method=\"post\" action=\"/update/{id}\">\n\
         <input type=\"hidden\" name=\"_method\" value=\"PUT\">\n\
         {fields}<button type=\"submit\">Save</button>\n</form>\n</td>\n\
         <td><form method=\"post\" action=\"/update/{id}\">\n\
         <input type=\"hidden\" name=\"_method\" value=\"DELETE\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n</td>\n</tr>\n"
    )
}

fn book_fields(book: Option<&Book>) -> String {
    let title = book.map(|b| escape_html(&b.title)).unwrap_or_default();
    let author = book.map(|b| escape_html(&b.author)).unwrap_or_default();
    let year = book.map(|b| b.publication_year.to_string()).unwrap_or_default();
    let checked = if book.map_or(false, |b| b.available) { " checked" } else { "" };

    format!(
        "<input name=\"title\" placeholder=\"Title\" value=\"{title}\" required>\n\
         <input name=\"author\" placeholder=\"Author\" value=\"{author}\" required>\n\
         <input name=\"publication_year\" type=\"number\" placeholder=\"Year\" value=\"{year}\" required>\n\
         <label><input name=\"available\" type=\"checkbox\"{checked}> Available</label>\n"
    )
}
