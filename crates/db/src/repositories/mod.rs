mod analytics_repo;
mod category_repo;
mod copy_log_repo;
mod favorite_repo;
mod product_repo;
mod reply_repo;
mod role_repo;
mod session_repo;
mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use category_repo::CategoryRepo;
pub use copy_log_repo::CopyLogRepo;
pub use favorite_repo::FavoriteRepo;
pub use product_repo::ProductRepo;
pub use reply_repo::ReplyRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
