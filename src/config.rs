use std::{collections::HashSet, fmt};

use crate::{error::ConfigError, piece::DEFAULT_ALPHABET};

/// Capacities, initial fill and piece alphabet of a [`PieceSupply`](crate::PieceSupply).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyConfig {
    pub queue_capacity: usize,
    pub stack_capacity: usize,
    pub initial_fill: usize,
    pub alphabet: Vec<char>,
}

impl SupplyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }

        if self.initial_fill > self.queue_capacity {
            return Err(ConfigError::InitialFillExceedsCapacity {
                initial_fill: self.initial_fill,
                queue_capacity: self.queue_capacity,
            });
        }

        check_alphabet(&self.alphabet)
    }
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Level::Master.config()
    }
}

pub(crate) fn check_alphabet(alphabet: &[char]) -> Result<(), ConfigError> {
    if alphabet.is_empty() {
        return Err(ConfigError::EmptyAlphabet);
    }

    let mut seen = HashSet::with_capacity(alphabet.len());
    for &kind in alphabet {
        if !seen.insert(kind) {
            return Err(ConfigError::DuplicateKind(kind));
        }
    }

    Ok(())
}

/// Preset configurations, from the plain queue up to queue, reserve and swaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// Ten-slot queue half filled, no reserve.
    Novice,
    /// Ten-slot queue half filled, three-slot reserve.
    Adventurer,
    /// Five-slot queue kept full, three-slot reserve.
    #[default]
    Master,
}

impl Level {
    pub fn config(self) -> SupplyConfig {
        let (queue_capacity, stack_capacity, initial_fill) = match self {
            Level::Novice => (10, 0, 5),
            Level::Adventurer => (10, 3, 5),
            Level::Master => (5, 3, 5),
        };

        SupplyConfig {
            queue_capacity,
            stack_capacity,
            initial_fill,
            alphabet: DEFAULT_ALPHABET.to_vec(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
            Level::Master => "master",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
