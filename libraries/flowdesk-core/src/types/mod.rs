mod ids;
mod user;

pub use ids::UserId;
pub use user::{Address, Company, CreateUserData, Geo, User, UserChanges, UserPatch};
