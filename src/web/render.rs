// src/web/render.rs

//! Server-side HTML rendering of a [`SearchPage`].

use std::fmt::Write;

use crate::handler::{CourseCard, SearchPage};
use crate::services::CategoryFilter;

const STYLE: &str = r#"
body { font-family: 'Poppins', sans-serif; background-color: #f0f4f8; margin: 0; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 240px; padding: 24px; background: #007BFF; color: #fff; }
.sidebar h2 { text-align: center; }
.sidebar label { display: block; margin: 8px 0; }
.sidebar form.refresh { margin-top: 32px; }
main { flex: 1; padding: 30px; background: linear-gradient(135deg, #6e8efb, #a777e3); }
h1 { color: #fff; font-size: 36px; }
input[type="text"] { border-radius: 25px; border: 1px solid #d6d6d6; padding: 10px; width: 100%; max-width: 500px; }
.warning { background: #fff3cd; color: #664d03; padding: 12px; border-radius: 10px; }
.hints { color: #fff; }
.grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }
.course-card { padding: 20px; border-radius: 15px; text-align: center; background: #fff;
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1); transition: transform 0.4s ease-in-out; }
.course-card:hover { transform: translateY(-10px) scale(1.03); }
.course-card img { width: 100%; height: 180px; object-fit: cover; border-radius: 10px; }
.course-card p { color: #4d4d4d; font-size: 15px; margin: 10px 0; }
.course-card a { text-decoration: none; color: #007BFF; font-weight: 500; }
"#;

/// Render the complete search page.
pub fn page(view: &SearchPage) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Course Search</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"layout\">\n");

    sidebar(&mut html, view);

    html.push_str("<main>\n<h1>🚀 Course Search</h1>\n");

    if let Some(warning) = &view.warning {
        let _ = writeln!(html, "<p class=\"warning\">{}</p>", escape(warning));
    }

    let query = view.query.as_deref().unwrap_or("");
    let _ = writeln!(
        html,
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"hidden\" name=\"category\" value=\"{}\">\n\
         <input type=\"text\" name=\"q\" value=\"{}\" placeholder=\"Type course name...\" autofocus>\n\
         </form>",
        view.category.as_str(),
        escape(query)
    );

    if !view.suggestions.is_empty() {
        html.push_str("<div class=\"hints\">\n<p>Did you mean:</p>\n<ul>\n");
        for suggestion in &view.suggestions {
            let _ = writeln!(html, "<li>{}</li>", escape(suggestion));
        }
        html.push_str("</ul>\n</div>\n");
    }

    if !view.message.is_empty() {
        let _ = writeln!(html, "<p class=\"hints\">{}</p>", escape(view.message));
    }

    html.push_str("<div class=\"grid\">\n");
    for course in &view.courses {
        card(&mut html, course);
    }
    html.push_str("</div>\n</main>\n</div>\n</body>\n</html>\n");
    html
}

fn sidebar(html: &mut String, view: &SearchPage) {
    html.push_str("<aside class=\"sidebar\">\n<h2>✨ Filter Courses</h2>\n");
    html.push_str("<form method=\"get\" action=\"/\">\n<p>Select Course Type</p>\n");

    for option in CategoryFilter::OPTIONS {
        let checked = if option == view.category { " checked" } else { "" };
        let _ = writeln!(
            html,
            "<label><input type=\"radio\" name=\"category\" value=\"{}\" onchange=\"this.form.submit()\"{}> {}</label>",
            option.as_str(),
            checked,
            option.label()
        );
    }
    if let Some(query) = &view.query {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"q\" value=\"{}\">",
            escape(query)
        );
    }

    html.push_str("<noscript><button type=\"submit\">Apply</button></noscript>\n</form>\n");
    html.push_str(
        "<form class=\"refresh\" method=\"post\" action=\"/refresh\">\
         <button type=\"submit\">Refresh catalog</button></form>\n",
    );
    html.push_str("</aside>\n");
}

fn card(html: &mut String, course: &CourseCard) {
    let _ = writeln!(
        html,
        "<div class=\"course-card\">\n\
         <a href=\"{url}\" target=\"_blank\" rel=\"noopener\">\n\
         <img src=\"{image}\" alt=\"{title}\">\n\
         <h3>{title}</h3>\n\
         </a>\n\
         <p><strong>Category:</strong> {category}</p>\n\
         <p><strong>Reviews:</strong> {reviews} | <strong>Rating:</strong> {stars}</p>\n\
         <p><strong>Lessons:</strong> {lessons}</p>\n\
         <p><strong>Price:</strong> {price}</p>\n\
         </div>",
        url = escape(&course.url),
        image = escape(&course.image),
        title = escape(&course.title),
        category = escape(&course.category),
        reviews = escape(&course.reviews),
        stars = course.stars,
        lessons = escape(&course.lessons),
        price = escape(&course.price),
    );
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
