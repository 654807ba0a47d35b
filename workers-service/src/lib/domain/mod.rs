pub mod user;
pub mod worker;
