//! Post pages: detail, create and edit forms

use std::fmt::Write;

use super::{delete_button, escape, layout, text_input};
use crate::models::{Post, PostForm, User};

/// GET /posts/{id}
pub fn detail(post: &Post, author: &User) -> String {
    let mut body = format!(
        "    <h1>{title}</h1>\n    <p>{content}</p>\n    <p><i>By <a href=\"/users/{user_id}\">{author}</a> on {date}</i></p>\n",
        title = escape(&post.title),
        content = escape(&post.content),
        user_id = author.id,
        author = escape(&author.full_name()),
        date = escape(&post.friendly_date()),
    );

    let _ = writeln!(
        body,
        "    <p><a href=\"/users/{user_id}\">Cancel</a> <a href=\"/posts/{id}/edit\">Edit</a></p>",
        user_id = post.user_id,
        id = post.id,
    );
    body.push_str(&delete_button(&format!("/posts/{}/delete", post.id), "Delete"));

    layout(&post.title, &body)
}

/// GET /users/{id}/posts/new
pub fn new_form(author: &User) -> String {
    let body = format!(
        "    <h1>Add Post for {name}</h1>\n{form}",
        name = escape(&author.full_name()),
        form = form(
            &format!("/users/{}/posts/new", author.id),
            &PostForm::default(),
            "Add",
            &format!("/users/{}", author.id),
        ),
    );
    layout("Add Post", &body)
}

/// GET /posts/{id}/edit
pub fn edit_form(post: &Post) -> String {
    let body = format!(
        "    <h1>Edit Post</h1>\n{form}",
        form = form(
            &format!("/posts/{}/edit", post.id),
            &PostForm::from(post),
            "Edit",
            &format!("/posts/{}", post.id),
        ),
    );
    layout("Edit Post", &body)
}

fn form(action: &str, values: &PostForm, submit: &str, cancel: &str) -> String {
    let mut out = format!(
        "    <form method=\"POST\" action=\"{action}\">\n",
        action = escape(action)
    );
    out.push_str(&text_input("title", "Title", &values.title));
    let _ = write!(
        out,
        "      <p><label for=\"content\">Content</label> <textarea id=\"content\" name=\"content\">{content}</textarea></p>\n",
        content = escape(&values.content),
    );
    let _ = write!(
        out,
        "      <p><a href=\"{cancel}\">Cancel</a> <button type=\"submit\">{submit}</button></p>\n    </form>",
        cancel = escape(cancel),
        submit = escape(submit),
    );
    out
}
