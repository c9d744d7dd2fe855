//! The six traversal orders a container can be walked in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Selects one of the six traversal orders of an
/// [`OrderedContainer`](crate::OrderedContainer).
///
/// The `Display` form is the snake-case name of the order, and [`FromStr`]
/// accepts the same names (`-` may stand in for `_`, and `normal` is accepted
/// as an alias of `insertion`).
///
/// # Examples
///
/// ```rust
/// use orderly::TraversalOrder;
///
/// let order: TraversalOrder = "side-cross".parse().unwrap();
/// assert_eq!(order, TraversalOrder::SideCross);
/// assert_eq!(order.to_string(), "side_cross");
/// assert!(order.is_sorted_order());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TraversalOrder {
    /// Sorted, smallest first.
    Ascending,
    /// Sorted, largest first.
    Descending,
    /// Sorted, alternating between the smallest and largest remaining values.
    SideCross,
    /// Insertion order, last inserted first.
    Reverse,
    /// Insertion order.
    Insertion,
    /// Insertion order, starting at the centre and expanding outward.
    MiddleOut,
}

impl TraversalOrder {
    /// Every order, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Ascending,
        Self::Descending,
        Self::SideCross,
        Self::Reverse,
        Self::Insertion,
        Self::MiddleOut,
    ];

    /// Returns the snake-case name of this order.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::SideCross => "side_cross",
            Self::Reverse => "reverse",
            Self::Insertion => "insertion",
            Self::MiddleOut => "middle_out",
        }
    }

    /// Returns `true` if cursors of this order sort their snapshot.
    #[must_use]
    pub const fn is_sorted_order(self) -> bool {
        matches!(self, Self::Ascending | Self::Descending | Self::SideCross)
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Returned when a string does not name a [`TraversalOrder`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown traversal order: {input:?}")]
pub struct ParseTraversalOrderError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for TraversalOrder {
    type Err = ParseTraversalOrderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "side_cross" => Ok(Self::SideCross),
            "reverse" => Ok(Self::Reverse),
            "insertion" | "normal" => Ok(Self::Insertion),
            "middle_out" => Ok(Self::MiddleOut),
            _ => Err(ParseTraversalOrderError {
                input: input.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_round_trips_through_from_str() {
        for order in TraversalOrder::ALL {
            assert_eq!(order.to_string().parse::<TraversalOrder>(), Ok(order));
        }
    }

    #[rstest]
    #[case("normal", TraversalOrder::Insertion)]
    #[case("Middle-Out", TraversalOrder::MiddleOut)]
    #[case("  descending ", TraversalOrder::Descending)]
    fn test_from_str_accepts_aliases(#[case] input: &str, #[case] expected: TraversalOrder) {
        assert_eq!(input.parse::<TraversalOrder>(), Ok(expected));
    }

    #[rstest]
    fn test_from_str_rejects_unknown_name() {
        let error = "sideways".parse::<TraversalOrder>().unwrap_err();
        assert_eq!(error.input, "sideways");
        assert_eq!(error.to_string(), "unknown traversal order: \"sideways\"");
    }

    #[rstest]
    fn test_only_sorting_orders_report_sorted() {
        let sorted: Vec<TraversalOrder> = TraversalOrder::ALL
            .into_iter()
            .filter(|order| order.is_sorted_order())
            .collect();
        assert_eq!(
            sorted,
            vec![
                TraversalOrder::Ascending,
                TraversalOrder::Descending,
                TraversalOrder::SideCross
            ]
        );
    }
}
