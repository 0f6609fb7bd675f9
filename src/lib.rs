pub mod api;
pub mod application;
pub mod domain;
