use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course a dish is served as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    Starter,
    Main,
    Dessert,
    /// Any value not recognised when reading foreign data
    #[serde(other)]
    Other,
}

impl Course {
    /// Courses a dish can be created with, in menu order
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "starter",
            Course::Main => "main",
            Course::Dessert => "dessert",
            Course::Other => "other",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Course {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Course::Starter),
            "main" => Ok(Course::Main),
            "dessert" => Ok(Course::Dessert),
            _ => Err(format!("Invalid course: {}", s)),
        }
    }
}
