//! HTML rendering for the four blog views.
//!
//! Templating proper is an external concern; these functions are the render
//! collaborator the handlers feed their context into. Each function's
//! parameters are exactly the context keys the corresponding view exposes
//! (posts/page, post/comments/form, post/form/sent, post/comment/errors).
//! All user-supplied text is HTML-escaped.

use crate::forms::{CommentForm, EmailPostForm, FieldErrors};
use crate::models::{Comment, Post};
use crate::pagination::Page;
use std::fmt::Write;

/// Escape text for safe interpolation into HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| format!("<p>{}</p>", escape(p.trim())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn errors_for(errors: &FieldErrors, field: &str) -> String {
    match errors.get(field) {
        Some(messages) if !messages.is_empty() => {
            let items: String = messages
                .iter()
                .map(|m| format!("<li>{}</li>", escape(m)))
                .collect();
            format!("<ul class=\"errorlist\" data-field=\"{field}\">{items}</ul>")
        }
        _ => String::new(),
    }
}

fn text_input(name: &str, label: &str, value: Option<&str>, errors: &FieldErrors) -> String {
    format!(
        "{errors}<p><label for=\"id_{name}\">{label}</label>\
         <input type=\"text\" name=\"{name}\" id=\"id_{name}\" value=\"{value}\"></p>",
        errors = errors_for(errors, name),
        label = escape(label),
        value = escape(value.unwrap_or("")),
    )
}

fn textarea(name: &str, label: &str, value: Option<&str>, errors: &FieldErrors) -> String {
    format!(
        "{errors}<p><label for=\"id_{name}\">{label}</label>\
         <textarea name=\"{name}\" id=\"id_{name}\">{value}</textarea></p>",
        errors = errors_for(errors, name),
        label = escape(label),
        value = escape(value.unwrap_or("")),
    )
}

fn comment_form_html(action: &str, form: &CommentForm, errors: &FieldErrors) -> String {
    format!(
        "<form action=\"{action}\" method=\"post\">\n{name}\n{email}\n{body}\n\
         <p><input type=\"submit\" value=\"Add comment\"></p>\n</form>",
        name = text_input("name", "Name", form.name.as_deref(), errors),
        email = text_input("email", "Email", form.email.as_deref(), errors),
        body = textarea("body", "Body", form.body.as_deref(), errors),
    )
}

/// Post list view. Context: posts (current page slice), page.
pub fn post_list(posts: &[Post], page: &Page) -> String {
    let mut body = String::from("<h1>My Blog</h1>\n");
    for post in posts {
        let _ = write!(
            body,
            "<article>\n<h2><a href=\"{href}\">{title}</a></h2>\n\
             <p class=\"date\">Published {date}</p>\n{excerpt}\n</article>\n",
            href = escape(&post.path()),
            title = escape(&post.title),
            date = post.publish.format("%b %e, %Y"),
            excerpt = paragraphs(&post.body),
        );
    }
    let _ = write!(
        body,
        "<nav class=\"pagination\">\n{prev}<span class=\"current\">Page {number} of {total}</span>\n{next}</nav>",
        prev = if page.has_previous() {
            format!("<a href=\"/?page={}\">Previous</a>\n", page.number - 1)
        } else {
            String::new()
        },
        number = page.number,
        total = page.num_pages,
        next = if page.has_next() {
            format!("<a href=\"/?page={}\">Next</a>\n", page.number + 1)
        } else {
            String::new()
        },
    );
    layout("My Blog", &body)
}

/// Post detail view. Context: post, comments (active only), form (empty).
pub fn post_detail(post: &Post, comments: &[Comment]) -> String {
    let mut body = format!(
        "<h1>{title}</h1>\n<p class=\"date\">Published {date}</p>\n{content}\n\
         <p><a href=\"/{id}/share/\">Share this post</a></p>\n",
        title = escape(&post.title),
        date = post.publish.format("%b %e, %Y"),
        content = paragraphs(&post.body),
        id = post.id,
    );

    let _ = write!(body, "<h2>{} comment(s)</h2>\n", comments.len());
    if comments.is_empty() {
        body.push_str("<p>There are no comments yet.</p>\n");
    }
    for (idx, comment) in comments.iter().enumerate() {
        let _ = write!(
            body,
            "<div class=\"comment\">\n<p class=\"info\">Comment {n} by {name}, {date}</p>\n{text}\n</div>\n",
            n = idx + 1,
            name = escape(&comment.name),
            date = comment.created_at.format("%b %e, %Y"),
            text = paragraphs(&comment.body),
        );
    }

    let _ = write!(
        body,
        "<h2>Add a new comment</h2>\n{}",
        comment_form_html(
            &format!("/{}/comment/", post.id),
            &CommentForm::default(),
            &FieldErrors::new()
        )
    );
    layout(&post.title, &body)
}

/// Share view (GET and failed/successful POST).
/// Context: post, form, sent; field errors attached to the form.
pub fn post_share(post: &Post, form: &EmailPostForm, errors: &FieldErrors, sent: bool) -> String {
    let body = if sent {
        format!(
            "<h1>E-mail successfully sent</h1>\n\
             <p>\"{title}\" was successfully sent to {to}.</p>",
            title = escape(&post.title),
            to = escape(form.to.as_deref().unwrap_or("")),
        )
    } else {
        format!(
            "<h1>Share \"{title}\" by e-mail</h1>\n\
             <form action=\"/{id}/share/\" method=\"post\">\n{name}\n{email}\n{to}\n{comments}\n\
             <p><input type=\"submit\" value=\"Send e-mail\"></p>\n</form>",
            title = escape(&post.title),
            id = post.id,
            name = text_input("name", "Your name", form.name.as_deref(), errors),
            email = text_input("email", "Your email", form.email.as_deref(), errors),
            to = text_input("to", "Recipient email", form.to.as_deref(), errors),
            comments = textarea("comments", "Comments", form.comments.as_deref(), errors),
        )
    };
    layout("Share a post", &body)
}

/// Comment confirmation fragment.
/// Context: post, comment (None on validation failure), form, errors.
pub fn post_comment(
    post: &Post,
    comment: Option<&Comment>,
    form: &CommentForm,
    errors: &FieldErrors,
) -> String {
    let body = match comment {
        Some(comment) => format!(
            "<h1>Your comment has been added</h1>\n\
             <div class=\"comment\">\n<p class=\"info\">Comment by {name} on \
             <a href=\"{href}\">{title}</a></p>\n{text}\n</div>\n\
             <p>It will appear once it has been approved.</p>",
            name = escape(&comment.name),
            href = escape(&post.path()),
            title = escape(&post.title),
            text = paragraphs(&comment.body),
        ),
        None => format!(
            "<h1>Add a comment to \"{title}\"</h1>\n{form}",
            title = escape(&post.title),
            form = comment_form_html(&format!("/{}/comment/", post.id), form, errors),
        ),
    };
    layout("Add a comment", &body)
}

/// Minimal page for 4xx/5xx responses.
pub fn error_page(status: u16, title: &str) -> String {
    layout(
        title,
        &format!("<h1>{status} {}</h1>", escape(title)),
    )
}
