pub mod user;
pub mod worker;

pub use user::PostgresUserRepository;
pub use worker::PostgresWorkerRepository;
