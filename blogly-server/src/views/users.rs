//! User pages: list, detail, create and edit forms

use std::fmt::Write;

use super::{delete_button, escape, layout, text_input};
use crate::config::AvatarConfig;
use crate::models::{Post, User, UserForm};

/// GET /users
pub fn list(users: &[User]) -> String {
    let mut body = String::from("    <h1>Users</h1>\n    <ul>\n");
    for user in users {
        let _ = writeln!(
            body,
            "      <li><a href=\"/users/{id}\">{name}</a></li>",
            id = user.id,
            name = escape(&user.full_name()),
        );
    }
    body.push_str("    </ul>\n    <p><a href=\"/users/new\">Add user</a></p>");

    layout("Users", &body)
}

/// GET /users/{id}
pub fn detail(user: &User, posts: &[Post], avatars: &AvatarConfig) -> String {
    let mut body = format!(
        "    <img src=\"{src}\" alt=\"{name}\" width=\"200\">\n    <h1>{name}</h1>\n",
        src = escape(user.avatar_url(avatars)),
        name = escape(&user.full_name()),
    );

    body.push_str("    <h2>Posts</h2>\n    <ul>\n");
    for post in posts {
        let _ = writeln!(
            body,
            "      <li><a href=\"/posts/{id}\">{title}</a> <small>{date}</small></li>",
            id = post.id,
            title = escape(&post.title),
            date = escape(&post.friendly_date()),
        );
    }
    body.push_str("    </ul>\n");

    let _ = writeln!(
        body,
        "    <p><a href=\"/users/{id}/edit\">Edit</a> <a href=\"/users/{id}/posts/new\">Add post</a></p>",
        id = user.id,
    );
    body.push_str(&delete_button(&format!("/users/{}/delete", user.id), "Delete"));

    layout(&user.full_name(), &body)
}

/// GET /users/new
pub fn new_form() -> String {
    let body = format!(
        "    <h1>Create a user</h1>\n{form}",
        form = form("/users/new", &UserForm::default(), "Add", "/users"),
    );
    layout("Create a user", &body)
}

/// GET /users/{id}/edit
pub fn edit_form(user: &User) -> String {
    let body = format!(
        "    <h1>Edit a user</h1>\n{form}",
        form = form(
            &format!("/users/{}/edit", user.id),
            &UserForm::from(user),
            "Save",
            &format!("/users/{}", user.id),
        ),
    );
    layout("Edit a user", &body)
}

fn form(action: &str, values: &UserForm, submit: &str, cancel: &str) -> String {
    let mut out = format!(
        "    <form method=\"POST\" action=\"{action}\">\n",
        action = escape(action)
    );
    out.push_str(&text_input("first_name", "First Name", &values.first_name));
    out.push_str(&text_input("last_name", "Last Name", &values.last_name));
    out.push_str(&text_input("image_url", "Image URL", &values.image_url));
    let _ = write!(
        out,
        "      <p><a href=\"{cancel}\">Cancel</a> <button type=\"submit\">{submit}</button></p>\n    </form>",
        cancel = escape(cancel),
        submit = escape(submit),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn monkey() -> User {
        User {
            id: 3,
            first_name: "Monkey".into(),
            last_name: Some("Mark".into()),
            image_url: None,
        }
    }

    #[test]
    fn list_links_each_user() {
        let html = list(&[monkey()]);
        assert!(html.contains("<h1>Users</h1>"));
        assert!(html.contains("<a href=\"/users/3\">Monkey Mark</a>"));
    }

    #[test]
    fn detail_uses_placeholder_and_lists_posts() {
        let post = Post {
            id: 9,
            title: "Which Banana".into(),
            content: "This banana".into(),
            created_at: Utc::now(),
            user_id: 3,
        };
        let avatars = AvatarConfig::default();
        let html = detail(&monkey(), &[post], &avatars);

        assert!(html.contains(&avatars.placeholder_url));
        assert!(html.contains("<a href=\"/posts/9\">Which Banana</a>"));
        assert!(html.contains("action=\"/users/3/delete\""));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = edit_form(&monkey());
        assert!(html.contains("name=\"first_name\" value=\"Monkey\""));
        assert!(html.contains("name=\"image_url\" value=\"\""));
    }

    #[test]
    fn new_form_heading() {
        assert!(new_form().contains("<h1>Create a user</h1>"));
    }
}
