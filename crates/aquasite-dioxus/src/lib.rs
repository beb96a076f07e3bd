pub mod services;
pub mod ui;
