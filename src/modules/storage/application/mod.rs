pub mod ports;
pub mod service;
pub mod upload_policy;
pub mod use_cases;
