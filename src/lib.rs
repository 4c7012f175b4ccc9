pub mod client;
pub mod config;
pub mod controller;
pub mod fonts;
pub mod highlight;
pub mod i18n;
pub mod types;
pub mod ui;
