pub mod db_add_account;
pub mod db_add_survey;
pub mod db_authentication;
pub mod db_load_account_by_token;

pub use db_add_account::DbAddAccount;
pub use db_add_survey::DbAddSurvey;
pub use db_authentication::DbAuthentication;
pub use db_load_account_by_token::DbLoadAccountByToken;
