pub mod analytics;
pub mod category;
pub mod copy_log;
pub mod favorite;
pub mod product;
pub mod reply;
pub mod role;
pub mod session;
pub mod user;
