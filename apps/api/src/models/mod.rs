pub mod saved_job;
pub mod user;
