mod session_repo;
mod teacher_repo;
mod user_repo;

pub use session_repo::{Participation, SessionRepo};
pub use teacher_repo::TeacherRepo;
pub use user_repo::UserRepo;
