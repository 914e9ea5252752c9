use crate::auth::Identity;
use crate::domain::{House, ListingPage};
use crate::flash::Flash;
use crate::templates::components::{house_card, pager};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct ListingVm<'a> {
    pub page: &'a ListingPage,
    pub houses: &'a [House],
    pub who: &'a Identity,
    pub flash: Option<&'a Flash>,
}

pub fn listing_page(vm: &ListingVm<'_>) -> Markup {
    desktop_layout(
        &format!("Houses in Bulosan · Page {}", vm.page.number),
        Some(vm.who),
        vm.flash,
        html! {
            main class="container" {
                h1 { "Houses for rent in Bulosan" }
                p class="lead" { "Welcome, " (vm.who.username) "!" }

                @if vm.houses.is_empty() {
                    p class="empty" { "No houses listed on this page yet." }
                } @else {
                    div class="grid" {
                        @for house in vm.houses {
                            (house_card(house))
                        }
                    }
                }

                (pager(vm.page))
            }
        },
    )
}
