pub mod hireboard_title;
pub mod job_card;
pub mod navbar;
pub mod page;

pub use hireboard_title::HireboardTitleButton;
pub use job_card::{JobCard, JobMeta};
pub use navbar::Navbar;
pub use page::Page;
