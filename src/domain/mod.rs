pub mod house;
pub mod pages;
pub mod rental;
pub mod signup;

pub use house::{House, HouseStatus};
pub use pages::{page_by_path, page_for_house, ListingPage, PAGES};
pub use rental::RentalApplication;
pub use signup::Signup;
