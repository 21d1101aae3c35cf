use std::fmt;

/// The simplex transformation applied during one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// The worst vertex was replaced by its reflection through the centroid.
    Reflect,

    /// The worst vertex was replaced by a point further along the reflection.
    Expand,

    /// The worst vertex was replaced by a point between centroid and reflection.
    Contract,

    /// Every vertex except the best was pulled toward the best vertex.
    Reduce,
}

impl Operation {
    /// Returns the lowercase label for this operation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Reflect => "reflect",
            Self::Expand => "expand",
            Self::Contract => "contract",
            Self::Reduce => "reduce",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
