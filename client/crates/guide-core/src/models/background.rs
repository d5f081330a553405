use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize};

/// Learning background offered by the signup forms. The set is closed.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
pub enum Background {
    #[default]
    Student,
    Professional,
    Hobbyist,
}

impl Background {
    pub const ALL: [Background; 3] = [Self::Student, Self::Professional, Self::Hobbyist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Professional => "Professional",
            Self::Hobbyist => "Hobbyist",
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Background {
    type Err = CoreError;

    /// Case-insensitive: content pages filter on lower-case values.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professional" => Ok(Self::Professional),
            "hobbyist" => Ok(Self::Hobbyist),
            _ => Err(CoreError::InvalidBackground {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Background::from_str(&s).map_err(|e| serde::de::Error::custom(e.user_message()))
    }
}
