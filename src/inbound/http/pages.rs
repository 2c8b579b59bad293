//! HTML assembly for the directory pages.
//!
//! Handlers pass plain domain values in; all user-supplied text is escaped
//! here, at the rendering boundary, so upstream layers never produce
//! pre-escaped strings.

use crate::domain::user::User;

const STYLESHEET: &str = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">"#;

fn escape(text: &str) -> String {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n{STYLESHEET}\n</head>\n<body>\n\
         <div class=\"container mt-5\">\n{body}\n</div>\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// Landing page linking to the listing and the create form.
pub fn index_page() -> String {
    layout(
        "User Directory",
        r#"<h1 class="text-center text-primary">User Directory</h1>
<p class="text-center">Create, read, update, and delete user records.</p>
<div class="text-center">
  <a href="/users" class="btn btn-success m-2">View users</a>
  <a href="/add-user" class="btn btn-warning m-2">Add user</a>
</div>"#,
    )
}

/// Table of all users with edit and delete links.
pub fn user_list_page(users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        rows.push_str(&format!(
            "<tr>\n<td>{id}</td>\n<td>{name}</td>\n<td>{email}</td>\n<td>\n\
             <a href=\"/edit-user/{id}\" class=\"btn btn-sm btn-info\">Edit</a>\n\
             <a href=\"/delete-user/{id}\" class=\"btn btn-sm btn-danger\">Delete</a>\n\
             </td>\n</tr>\n",
            id = user.id(),
            name = escape(user.name()),
            email = escape(user.email()),
        ));
    }
    layout(
        "All users",
        &format!(
            r#"<h2 class="text-center text-info">All users</h2>
<table class="table table-striped table-bordered mt-3">
  <thead class="table-dark">
    <tr><th>ID</th><th>Name</th><th>Email</th><th>Actions</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<div class="text-center"><a href="/" class="btn btn-primary">Back</a></div>"#
        ),
    )
}

fn user_form(action: &str, submit_label: &str, name: &str, email: &str) -> String {
    format!(
        r#"<form method="POST" action="{action}" class="mt-3">
  <div class="mb-3">
    <label class="form-label">Name:</label>
    <input type="text" name="name" class="form-control" value="{name}" required>
  </div>
  <div class="mb-3">
    <label class="form-label">Email:</label>
    <input type="email" name="email" class="form-control" value="{email}" required>
  </div>
  <button type="submit" class="btn btn-success">{submit_label}</button>
  <a href="/users" class="btn btn-secondary">Cancel</a>
</form>"#,
        action = escape(action),
        name = escape(name),
        email = escape(email),
    )
}

/// Blank create form.
pub fn add_user_page() -> String {
    layout(
        "Add user",
        &format!(
            "<h2 class=\"text-center text-success\">Add user</h2>\n{}",
            user_form("/add-user", "Save", "", "")
        ),
    )
}

/// Edit form prefilled with the stored values.
pub fn edit_user_page(user: &User) -> String {
    layout(
        "Edit user",
        &format!(
            "<h2 class=\"text-center text-warning\">Edit user</h2>\n{}",
            user_form(
                &format!("/edit-user/{}", user.id()),
                "Save changes",
                user.name(),
                user.email(),
            )
        ),
    )
}

/// Single-message page used for not-found and failure outcomes.
pub fn message_page(message: &str) -> String {
    layout(
        "User Directory",
        &format!(
            "<p class=\"text-center mt-3\">{}</p>\n\
             <div class=\"text-center\"><a href=\"/users\" class=\"btn btn-primary\">Back to users</a></div>",
            escape(message)
        ),
    )
}
