pub mod home;
pub mod job_board;
pub mod job_detail;
pub mod not_found;

pub use home::Home;
pub use job_board::JobBoard;
pub use job_detail::JobDetail;
pub use not_found::NotFound;
