mod activity_card;
mod app;
mod message_banner;
mod signup_form;

pub use app::App;
