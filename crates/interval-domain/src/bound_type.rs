//! Bound type module - the eight boundary policies of a range

/// Boundary policy of a [`Range`](crate::Range)
///
/// Fixed at construction. The four fully-bounded policies store both
/// endpoints; the four half-bounded policies store exactly one:
/// - `LessThan` / `AtMost` store only the upper endpoint
/// - `GreaterThan` / `AtLeast` store only the lower endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
    /// `(a, b)` - neither endpoint included
    Open,

    /// `[a, b]` - both endpoints included
    Closed,

    /// `(a, b]` - upper endpoint only
    OpenClosed,

    /// `[a, b)` - lower endpoint only
    ClosedOpen,

    /// Every value strictly below the endpoint
    LessThan,

    /// Every value strictly above the endpoint
    GreaterThan,

    /// Lower endpoint included; only the endpoint itself is a member
    AtLeast,

    /// Every value at or below the endpoint
    AtMost,
}

impl BoundType {
    /// All policies, fully-bounded first
    pub const ALL: [BoundType; 8] = [
        BoundType::Open,
        BoundType::Closed,
        BoundType::OpenClosed,
        BoundType::ClosedOpen,
        BoundType::LessThan,
        BoundType::GreaterThan,
        BoundType::AtLeast,
        BoundType::AtMost,
    ];

    /// Get the bound type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundType::Open => "open",
            BoundType::Closed => "closed",
            BoundType::OpenClosed => "open-closed",
            BoundType::ClosedOpen => "closed-open",
            BoundType::LessThan => "less-than",
            BoundType::GreaterThan => "greater-than",
            BoundType::AtLeast => "at-least",
            BoundType::AtMost => "at-most",
        }
    }

    /// Parse a bound type from its name
    ///
    /// Case-insensitive; `_` is accepted in place of `-`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "open" => Some(BoundType::Open),
            "closed" => Some(BoundType::Closed),
            "open-closed" => Some(BoundType::OpenClosed),
            "closed-open" => Some(BoundType::ClosedOpen),
            "less-than" => Some(BoundType::LessThan),
            "greater-than" => Some(BoundType::GreaterThan),
            "at-least" => Some(BoundType::AtLeast),
            "at-most" => Some(BoundType::AtMost),
            _ => None,
        }
    }

    /// Whether this policy stores a single endpoint
    pub fn is_half_bounded(&self) -> bool {
        matches!(
            self,
            BoundType::LessThan | BoundType::GreaterThan | BoundType::AtLeast | BoundType::AtMost
        )
    }

    /// Whether the stored lower endpoint is itself a member
    pub fn includes_lower(&self) -> bool {
        matches!(self, BoundType::Closed | BoundType::ClosedOpen | BoundType::AtLeast)
    }

    /// Whether the stored upper endpoint is itself a member
    pub fn includes_upper(&self) -> bool {
        matches!(self, BoundType::Closed | BoundType::OpenClosed | BoundType::AtMost)
    }
}

impl std::fmt::Display for BoundType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BoundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid bound type: {}", s))
    }
}
