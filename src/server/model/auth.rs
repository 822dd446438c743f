//! Authentication guards.
//!
//! Hireboard has two independent guards sharing one session store. Each guard has its own
//! session key, remember cookie, and credential table, so a browser may be logged in as a company
//! and as an applicant at the same time without either affecting the other.

use std::fmt;

use entity::sea_orm_active_enums::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    Company,
    Applicant,
}

impl Guard {
    pub const ALL: [Guard; 2] = [Guard::Company, Guard::Applicant];

    /// Name used in routes, log events and throttle keys
    pub fn name(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Applicant => "applicant",
        }
    }

    pub fn session_key(self) -> &'static str {
        match self {
            Self::Company => "hireboard:company:id",
            Self::Applicant => "hireboard:applicant:id",
        }
    }

    pub fn remember_cookie(self) -> &'static str {
        match self {
            Self::Company => "remember_company",
            Self::Applicant => "remember_applicant",
        }
    }

    /// Principal type stored alongside email verification tokens
    pub fn principal(self) -> Principal {
        match self {
            Self::Company => Principal::Company,
            Self::Applicant => Principal::Applicant,
        }
    }

    /// Guards other than this one
    pub fn others(self) -> impl Iterator<Item = Guard> {
        Self::ALL.into_iter().filter(move |guard| *guard != self)
    }
}

impl From<Principal> for Guard {
    fn from(principal: Principal) -> Self {
        match principal {
            Principal::Company => Self::Company,
            Principal::Applicant => Self::Applicant,
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
