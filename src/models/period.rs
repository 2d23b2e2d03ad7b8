use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time of day a group of readings belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Period {
    Morning,
    Lunch,
    Dinner,
    Bedtime,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Morning,
        Period::Lunch,
        Period::Dinner,
        Period::Bedtime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Lunch => "Lunch",
            Period::Dinner => "Dinner",
            Period::Bedtime => "Bedtime",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
