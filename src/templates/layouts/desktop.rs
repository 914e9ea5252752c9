use crate::auth::Identity;
use crate::domain::PAGES;
use crate::flash::Flash;
use crate::templates::components::flash_banner;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(
    title: &str,
    who: Option<&Identity>,
    flash: Option<&Flash>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Bulosan Rentals" }
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  h3 { "Bulosan Rentals" }
                  nav {
                      ul {
                          @if let Some(who) = who {
                              li { a href=(PAGES[0].path) { "Listings" } }
                              @if who.is_admin {
                                  li { a href="/home" { "Admin" } }
                              }
                          }
                      }
                  }

                  @match who {
                      Some(who) => span {
                          "Signed in as " strong { (who.username) } " · "
                          a href="/logout" { "Log out" }
                      },
                      None => a href="/login" class="text-base font-medium" { "Login" },
                  }
              }
                @if let Some(flash) = flash {
                    (flash_banner(flash))
                }
                (content)
            }
        }
    }
}
