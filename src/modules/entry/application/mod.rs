pub mod domain;
pub mod entry_use_cases;
pub mod ports;
pub mod services;
