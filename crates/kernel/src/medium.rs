use serde::{Deserialize, Serialize};

/// The locomotion context that selects which motion policy runs each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveMedium {
    Ground,
    #[default]
    Air,
    Wall,
}

impl MoveMedium {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveMedium::Ground => "ground",
            MoveMedium::Air => "air",
            MoveMedium::Wall => "wall",
        }
    }

    /// True when a transition from `old` to `new` entered `target`.
    pub fn did_change_to(old: MoveMedium, new: MoveMedium, target: MoveMedium) -> bool {
        old != target && new == target
    }
}

impl std::fmt::Display for MoveMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
