pub mod random_user_service;

pub use random_user_service::*;
