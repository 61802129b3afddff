//! Homework review domain types.

use std::fmt;
use std::str::FromStr;

pub mod response;

pub use response::check_response;

/// Review status reported by the homework API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sent to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}
