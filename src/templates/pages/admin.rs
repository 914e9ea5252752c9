use crate::auth::Identity;
use crate::domain::House;
use crate::flash::Flash;
use crate::templates::components::status_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn admin_home_page(houses: &[House], who: &Identity, flash: Option<&Flash>) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        Some(who),
        flash,
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }

                div class="card" {
                    h3 { "Listings" }
                    div style="overflow-x: auto;" {
                        table style="width: 100%; border-collapse: collapse; margin-top: 1rem;" {
                            thead {
                                tr {
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "ID" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Name" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Location" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Price" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Status" }
                                    th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Actions" }
                                }
                            }
                            tbody {
                                @for house in houses {
                                    tr class="house-row" {
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (house.id) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (house.name) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (house.location) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (house.price) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (status_badge(house)) }
                                        td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                            a href=(format!("/update_status/{}", house.id)) {
                                                @if house.is_rented() { "Mark For Rent" } @else { "Mark Rented" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
