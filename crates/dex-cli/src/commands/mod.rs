pub mod count;
pub mod dispatch;
pub mod list;
pub mod schema;
pub mod search;
pub mod show;
pub mod views;
