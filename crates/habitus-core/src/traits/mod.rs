mod user_model;

pub use user_model::{IUserModel, UserReaction};
