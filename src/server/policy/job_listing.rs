use crate::server::{error::policy::PolicyError, model::db::JobListingModel};

/// Abilities a company can exercise on a job listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobListingAbility {
    View,
    Update,
    Delete,
    Publish,
    Close,
    ViewApplications,
}

impl JobListingAbility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Publish => "publish",
            Self::Close => "close",
            Self::ViewApplications => "view applications of",
        }
    }
}

pub struct JobListingPolicy;

impl JobListingPolicy {
    /// Only the owning company may manage a listing
    pub fn authorize(
        company_id: i32,
        listing: &JobListingModel,
        ability: JobListingAbility,
    ) -> Result<(), PolicyError> {
        if listing.company_id == company_id {
            return Ok(());
        }

        Err(PolicyError::JobListingDenied {
            company_id,
            listing_id: listing.id,
            ability: ability.as_str(),
        })
    }
}
