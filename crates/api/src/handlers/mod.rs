pub mod admin;
pub mod analytics;
pub mod auth;
pub mod categories;
pub mod products;
pub mod replies;
