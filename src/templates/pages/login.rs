use crate::flash::Flash;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// `message` is the inline notice (logout confirmation, bad credentials).
pub fn login_page(message: Option<&str>, flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "Sign in",
        None,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                @if let Some(message) = message {
                    p class="notice" { (message) }
                }

                form method="post" action="/login" {
                    label for="username" { "Username" }
                    input type="text" id="username" name="username" autocomplete="username" required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" autocomplete="current-password" required;

                    button type="submit" class="primary" { "Sign in" }
                }

                p { "No account yet? " a href="/signup" { "Create one" } }
            }
        },
    )
}
