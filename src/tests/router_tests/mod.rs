mod auth_flow_tests;
mod listing_tests;
mod rental_tests;
