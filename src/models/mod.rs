pub mod activities;
#[allow(dead_code)]
pub mod users;

pub use activities::ActivitiesRow;
pub use users::UsersRow;
