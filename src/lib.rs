pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod model;
pub mod view;
