pub mod connection;
pub mod houses;
pub mod rentals;
pub mod users;

pub use connection::{init_db, now_unix, Database};
