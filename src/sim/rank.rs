//! Cosmetic rank tiers derived from a final score

use serde::{Deserialize, Serialize};

/// Rank tier. Pure function of score; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Unranked,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Rank {
    /// Tier for `score`. Bands are half-open and lower-inclusive, ten points wide
    /// starting at 10.
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=9 => Rank::Unranked,
            10..=19 => Rank::Bronze,
            20..=29 => Rank::Silver,
            30..=39 => Rank::Gold,
            _ => Rank::Platinum,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rank::Unranked => "Unranked",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
        }
    }

    /// CSS colour used on the game over panel
    pub fn color(&self) -> &'static str {
        match self {
            Rank::Unranked => "#888888",
            Rank::Bronze => "#CD7F32",
            Rank::Silver => "#C0C0C0",
            Rank::Gold => "#FFD700",
            Rank::Platinum => "#E5E4E2",
        }
    }

    pub fn is_ranked(&self) -> bool {
        *self != Rank::Unranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(Rank::for_score(0), Rank::Unranked);
        assert_eq!(Rank::for_score(9), Rank::Unranked);
        assert_eq!(Rank::for_score(10), Rank::Bronze);
        assert_eq!(Rank::for_score(19), Rank::Bronze);
        assert_eq!(Rank::for_score(20), Rank::Silver);
        assert_eq!(Rank::for_score(29), Rank::Silver);
        assert_eq!(Rank::for_score(30), Rank::Gold);
        assert_eq!(Rank::for_score(39), Rank::Gold);
        assert_eq!(Rank::for_score(40), Rank::Platinum);
        assert_eq!(Rank::for_score(u32::MAX), Rank::Platinum);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Rank::Gold.label(), "Gold");
        assert!(!Rank::Unranked.is_ranked());
        assert!(Rank::Bronze.is_ranked());
    }

    proptest! {
        #[test]
        fn rank_never_decreases_with_score(a in 0u32..200, b in 0u32..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(Rank::for_score(lo) <= Rank::for_score(hi));
        }
    }
}
