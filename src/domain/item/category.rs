//! Known item categories and id bounds of the upstream catalogue

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Ids the upstream catalogue serves
pub const ITEM_ID_RANGE: RangeInclusive<u64> = 1..=451;

/// Categories the upstream catalogue serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    General,
    KnockKnock,
    Programming,
    Dad,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::General, Self::KnockKnock, Self::Programming, Self::Dad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::KnockKnock => "knock-knock",
            Self::Programming => "programming",
            Self::Dad => "dad",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
                DomainError::invalid(format!(
                    "Unknown category '{}'. Known categories are: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Reject ids outside the catalogue before any upstream call
pub fn validate_item_id(id: u64) -> Result<u64, DomainError> {
    if ITEM_ID_RANGE.contains(&id) {
        Ok(id)
    } else {
        Err(DomainError::invalid(format!(
            "Item id must be between {} and {}, got {}",
            ITEM_ID_RANGE.start(),
            ITEM_ID_RANGE.end(),
            id
        )))
    }
}
