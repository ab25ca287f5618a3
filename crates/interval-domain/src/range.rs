//! Range module - an immutable interval over a totally ordered type

use crate::{BoundType, RangeError, Result};
use std::cmp::Ordering;
use std::fmt::{self, Write};

/// Immutable range over `T`
///
/// Built only through the named factories, one per [`BoundType`]. An absent
/// endpoint means the range is unbounded on that side; no sentinel value of
/// `T` is ever used in its place.
///
/// Two ranges built from equal endpoints and the same bound type are equal
/// and behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Option<T>,
    upper: Option<T>,
    bound_type: BoundType,
}

impl<T: Ord> Range<T> {
    /// Guarded constructor shared by the fully-bounded factories
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBounds`] when both endpoints are present
    /// and `lower >= upper`. Equal endpoints are rejected for every policy.
    fn new(lower: Option<T>, upper: Option<T>, bound_type: BoundType) -> Result<Self> {
        if let (Some(lower), Some(upper)) = (&lower, &upper) {
            if lower.cmp(upper) != Ordering::Less {
                tracing::debug!(
                    bound_type = %bound_type,
                    "rejected range: lower bound is not strictly below upper bound"
                );
                return Err(RangeError::InvalidBounds);
            }
        }

        Ok(Self::from_parts(lower, upper, bound_type))
    }

    fn from_parts(lower: Option<T>, upper: Option<T>, bound_type: BoundType) -> Self {
        tracing::trace!(bound_type = %bound_type, "range constructed");
        Self {
            lower,
            upper,
            bound_type,
        }
    }

    /// Create an open range `(lower, upper)` excluding both endpoints
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBounds`] unless `lower < upper`
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::new(Some(lower), Some(upper), BoundType::Open)
    }

    /// Create a closed range `[lower, upper]` including both endpoints
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBounds`] unless `lower < upper`
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::new(Some(lower), Some(upper), BoundType::Closed)
    }

    /// Create a range `(lower, upper]` including only the upper endpoint
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBounds`] unless `lower < upper`
    pub fn open_closed(lower: T, upper: T) -> Result<Self> {
        Self::new(Some(lower), Some(upper), BoundType::OpenClosed)
    }

    /// Create a range `[lower, upper)` including only the lower endpoint
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBounds`] unless `lower < upper`
    pub fn closed_open(lower: T, upper: T) -> Result<Self> {
        Self::new(Some(lower), Some(upper), BoundType::ClosedOpen)
    }

    /// Range of all values strictly less than `endpoint`
    pub fn less_than(endpoint: T) -> Self {
        Self::from_parts(None, Some(endpoint), BoundType::LessThan)
    }

    /// Range of all values strictly greater than `endpoint`
    pub fn greater_than(endpoint: T) -> Self {
        Self::from_parts(Some(endpoint), None, BoundType::GreaterThan)
    }

    /// Range anchored at `endpoint` with the lower endpoint included
    ///
    /// Membership is settled by the boundary check alone, which for this
    /// policy admits `endpoint` itself and nothing above it.
    pub fn at_least(endpoint: T) -> Self {
        Self::from_parts(Some(endpoint), None, BoundType::AtLeast)
    }

    /// Range of all values less than or equal to `endpoint`
    pub fn at_most(endpoint: T) -> Self {
        Self::from_parts(None, Some(endpoint), BoundType::AtMost)
    }

    /// Check if the range contains a value
    ///
    /// A value is a member when it sits on an included boundary or strictly
    /// inside a fully-bounded range. Half-bounded policies settle membership
    /// entirely in the boundary check.
    pub fn contains(&self, value: &T) -> bool {
        self.is_on_boundary(value) || self.is_in_interior(value)
    }

    fn is_on_boundary(&self, value: &T) -> bool {
        match self.bound_type {
            BoundType::Open => false,
            BoundType::Closed => {
                self.compare_lower(value) == Some(Ordering::Equal)
                    || self.compare_upper(value) == Some(Ordering::Equal)
            }
            BoundType::OpenClosed => self.compare_upper(value) == Some(Ordering::Equal),
            BoundType::ClosedOpen => self.compare_lower(value) == Some(Ordering::Equal),
            BoundType::LessThan => self.compare_upper(value) == Some(Ordering::Less),
            BoundType::GreaterThan => self.compare_lower(value) == Some(Ordering::Greater),
            // Equality only; the interior check never fires without an upper bound
            BoundType::AtLeast => self.compare_lower(value) == Some(Ordering::Equal),
            BoundType::AtMost => matches!(
                self.compare_upper(value),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }

    fn is_in_interior(&self, value: &T) -> bool {
        match (&self.lower, &self.upper) {
            (Some(lower), Some(upper)) => {
                value.cmp(lower) == Ordering::Greater && value.cmp(upper) == Ordering::Less
            }
            _ => false,
        }
    }

    // `None` when the side is unbounded
    fn compare_lower(&self, value: &T) -> Option<Ordering> {
        self.lower.as_ref().map(|lower| value.cmp(lower))
    }

    fn compare_upper(&self, value: &T) -> Option<Ordering> {
        self.upper.as_ref().map(|upper| value.cmp(upper))
    }
}

impl<T> Range<T> {
    /// Get the lower endpoint, `None` when unbounded below
    pub fn lower_bound(&self) -> Option<&T> {
        self.lower.as_ref()
    }

    /// Get the upper endpoint, `None` when unbounded above
    pub fn upper_bound(&self) -> Option<&T> {
        self.upper.as_ref()
    }

    /// Get the boundary policy
    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

/// Canonical form: `[L,U]`, `(L,U)`, `[L,+∞)`, `(-∞,U]` ...
///
/// `LessThan` renders as `(-∞,U]`, the same shape as `AtMost`.
impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.bound_type {
            BoundType::Open => ('(', ')'),
            BoundType::Closed => ('[', ']'),
            BoundType::OpenClosed => ('(', ']'),
            BoundType::ClosedOpen => ('[', ')'),
            BoundType::LessThan | BoundType::AtMost => ('(', ']'),
            BoundType::GreaterThan => ('(', ')'),
            BoundType::AtLeast => ('[', ')'),
        };

        f.write_char(open)?;
        match &self.lower {
            Some(lower) => write!(f, "{}", lower)?,
            None => f.write_str("-∞")?,
        }
        f.write_char(',')?;
        match &self.upper {
            Some(upper) => write!(f, "{}", upper)?,
            None => f.write_str("+∞")?,
        }
        f.write_char(close)
    }
}
