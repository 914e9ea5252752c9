use crate::flash::Flash;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn signup_page(flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "Create account",
        None,
        flash,
        html! {
            main class="container narrow" {
                h1 { "Create account" }

                form method="post" action="/signup" {
                    label for="username" { "Username" }
                    input type="text" id="username" name="username" autocomplete="username" required;

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" autocomplete="email" required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" autocomplete="new-password" required;

                    button type="submit" class="primary" { "Sign up" }
                }

                p { "Already registered? " a href="/login" { "Sign in" } }
            }
        },
    )
}
