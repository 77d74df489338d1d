pub mod account_repository;
pub mod log_repository;
pub mod manager;
pub mod survey_repository;

pub use account_repository::{AccountPgRepository, ADMIN_ROLE};
pub use log_repository::LogPgRepository;
pub use manager::{DatabaseError, DatabaseManager};
pub use survey_repository::SurveyPgRepository;
