pub mod format;
pub mod parse;
pub mod ports;
pub mod service;
pub mod use_cases;
