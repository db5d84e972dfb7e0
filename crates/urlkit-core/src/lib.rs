pub mod config;
pub mod logging;

pub mod mime;
pub mod url_model;
