pub mod admin;
pub mod listings;
pub mod login;
pub mod signup;

pub use admin::admin_home_page;
pub use listings::{listing_page, ListingVm};
pub use login::login_page;
pub use signup::signup_page;
