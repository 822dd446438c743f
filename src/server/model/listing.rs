//! Conversions between job listing entities and their API representations.

use entity::sea_orm_active_enums::{EmploymentType, JobListingStatus};

use crate::{
    model::job::{CompanyJobListingDto, EmploymentTypeDto, JobStatusDto, JobTierDto},
    server::model::db::{JobListingModel, JobTierModel},
};

impl From<EmploymentTypeDto> for EmploymentType {
    fn from(value: EmploymentTypeDto) -> Self {
        match value {
            EmploymentTypeDto::FullTime => Self::FullTime,
            EmploymentTypeDto::PartTime => Self::PartTime,
            EmploymentTypeDto::Contract => Self::Contract,
            EmploymentTypeDto::Internship => Self::Internship,
            EmploymentTypeDto::Temporary => Self::Temporary,
        }
    }
}

impl From<EmploymentType> for EmploymentTypeDto {
    fn from(value: EmploymentType) -> Self {
        match value {
            EmploymentType::FullTime => Self::FullTime,
            EmploymentType::PartTime => Self::PartTime,
            EmploymentType::Contract => Self::Contract,
            EmploymentType::Internship => Self::Internship,
            EmploymentType::Temporary => Self::Temporary,
        }
    }
}

impl From<JobListingStatus> for JobStatusDto {
    fn from(value: JobListingStatus) -> Self {
        match value {
            JobListingStatus::Draft => Self::Draft,
            JobListingStatus::Pending => Self::Pending,
            JobListingStatus::Published => Self::Published,
            JobListingStatus::Expired => Self::Expired,
            JobListingStatus::Closed => Self::Closed,
        }
    }
}

impl From<JobListingModel> for CompanyJobListingDto {
    fn from(listing: JobListingModel) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            location: listing.location,
            employment_type: listing.employment_type.into(),
            remote: listing.remote,
            salary_min: listing.salary_min,
            salary_max: listing.salary_max,
            status: listing.status.into(),
            published_at: listing.published_at,
            expires_at: listing.expires_at,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

impl From<JobTierModel> for JobTierDto {
    fn from(tier: JobTierModel) -> Self {
        Self {
            slug: tier.slug,
            name: tier.name,
            price_cents: tier.price_cents,
            duration_days: tier.duration_days,
            featured: tier.featured,
        }
    }
}
