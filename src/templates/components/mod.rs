use maud::{html, Markup};

use crate::domain::{House, ListingPage, PAGES};
use crate::flash::Flash;

pub mod error;

pub use error::html_error_response;

pub fn flash_banner(flash: &Flash) -> Markup {
    html! {
        div class=(format!("alert alert-{}", flash.kind.as_str())) role="alert" {
            (flash.message)
        }
    }
}

pub fn status_badge(house: &House) -> Markup {
    html! {
        @if house.is_rented() {
            span class="badge badge-rented" { (house.status.as_str()) }
        } @else {
            span class="badge badge-open" { (house.status.as_str()) }
        }
    }
}

/// A listing card; houses still for rent carry the application form.
pub fn house_card(house: &House) -> Markup {
    html! {
        div class="card" id=(format!("house-{}", house.id)) {
            h2 { (house.name) }
            div class="card-body" {
                p { (house.location) }
                p class="price" { (house.price) }
                p { (status_badge(house)) }

                @if !house.is_rented() {
                    form method="post" action=(format!("/rent/{}", house.id)) class="rent-form" {
                        input type="text" name="name" placeholder="Full name" required;
                        input type="email" name="email" placeholder="Email" required;
                        input type="tel" name="phone" placeholder="Phone" required;
                        label { "Move-in date " input type="date" name="movein" required; }
                        textarea name="message" placeholder="Message (optional)" {}
                        button type="submit" class="btn" { "Apply to rent" }
                    }
                }
            }
        }
    }
}

pub fn pager(current: &ListingPage) -> Markup {
    html! {
        nav class="pager" {
            @for page in PAGES.iter() {
                @if page.number == current.number {
                    strong { (page.number) }
                } @else {
                    a href=(page.path) { (page.number) }
                }
                " "
            }
        }
    }
}
