use core::cmp::{Ordering, Reverse};
use core::fmt::{Display, Formatter, Result as FmtResult};
use std::collections::BinaryHeap;

/// An entity that can appear in a leaderboard.
pub trait Ranked {
    /// Identifier used to break ties between equal scores; smaller ids rank higher.
    fn rank_id(&self) -> &str;
}

/// Errors raised by [`top_n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// The requested leaderboard size was below 1.
    InvalidArgument { n: usize },
}

impl Display for RankError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidArgument { n } => write!(f, "n should be at least 1, got {n}"),
        }
    }
}

impl core::error::Error for RankError {}

struct Candidate<T> {
    score: u64,
    item: T,
}

impl<T: Ranked> Ord for Candidate<T> {
    /// Greater means stronger: higher score first, then lower id.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.item.rank_id().cmp(self.item.rank_id()))
    }
}

impl<T: Ranked> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ranked> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ranked> Eq for Candidate<T> {}

/// Select the `n` highest-scoring items, strongest first.
///
/// Keeps a min-heap of at most `n` candidates, so the cost is O(total · log n) rather than a full
/// sort. Equal scores are ordered by [`Ranked::rank_id`] ascending. When there are fewer than `n`
/// items, all of them are returned.
///
/// # Errors
///
/// Returns [`RankError::InvalidArgument`] when `n` is 0.
pub fn top_n<T, F>(items: impl IntoIterator<Item = T>, n: usize, key: F) -> Result<Vec<T>, RankError>
where
    T: Ranked,
    F: Fn(&T) -> u64,
{
    if n < 1 {
        return Err(RankError::InvalidArgument { n });
    }

    let items = items.into_iter();
    let capacity = items.size_hint().0.min(n);
    let mut heap: BinaryHeap<Reverse<Candidate<T>>> = BinaryHeap::with_capacity(capacity);

    for item in items {
        let candidate = Candidate { score: key(&item), item };

        if heap.len() < n {
            heap.push(Reverse(candidate));
        } else if let Some(mut weakest) = heap.peek_mut()
            && candidate > weakest.0
        {
            *weakest = Reverse(candidate);
        }
    }

    // ascending order of `Reverse` is descending order of strength
    Ok(heap.into_sorted_vec().into_iter().map(|Reverse(candidate)| candidate.item).collect())
}
