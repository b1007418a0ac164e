use alloc::vec::Vec;
use core::ops::Range;

use crate::error::InvalidHeightSpec;
use crate::{HeightSpec, search};

/// Read-only geometry of a list: per-item heights, prefix sums and offset lookup.
///
/// Built from a [`HeightSpec`] plus an item count and rebuilt (never patched) whenever either
/// changes. The constant case answers every query in `O(1)`; the variable case keeps a
/// cumulative-height sequence and answers offset lookups in `O(log n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightModel {
    repr: Repr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Repr {
    Constant { height: u32, count: usize },
    // len == count + 1, cumulative[0] == 0
    Variable { cumulative: Vec<u64> },
}

impl HeightModel {
    /// Validates `spec` against `count` and builds the model.
    ///
    /// Fails when a height sequence does not have exactly `count` entries, or when a constant
    /// height is zero.
    pub fn new(spec: &HeightSpec, count: usize) -> Result<Self, InvalidHeightSpec> {
        let repr = match spec {
            HeightSpec::Constant(0) => return Err(InvalidHeightSpec::ZeroConstantHeight),
            HeightSpec::Constant(height) => Repr::Constant {
                height: *height,
                count,
            },
            HeightSpec::Variable(heights) => {
                if heights.len() != count {
                    return Err(InvalidHeightSpec::LengthMismatch {
                        heights: heights.len(),
                        items: count,
                    });
                }
                Repr::Variable {
                    cumulative: prefix_sums(heights),
                }
            }
        };
        Ok(Self { repr })
    }

    /// A constant-height model. Equivalent to `new(&HeightSpec::Constant(height), count)`.
    pub fn constant(height: u32, count: usize) -> Result<Self, InvalidHeightSpec> {
        Self::new(&HeightSpec::Constant(height), count)
    }

    /// A variable-height model whose item count is `heights.len()`.
    pub fn variable(heights: &[u32]) -> Self {
        Self {
            repr: Repr::Variable {
                cumulative: prefix_sums(heights),
            },
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.repr, Repr::Constant { .. })
    }

    pub fn count(&self) -> usize {
        match &self.repr {
            Repr::Constant { count, .. } => *count,
            Repr::Variable { cumulative } => cumulative.len() - 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn total_height(&self) -> u64 {
        match &self.repr {
            Repr::Constant { height, count } => (*height as u64).saturating_mul(*count as u64),
            Repr::Variable { cumulative } => cumulative.last().copied().unwrap_or(0),
        }
    }

    pub fn height_of(&self, index: usize) -> Option<u32> {
        if index >= self.count() {
            return None;
        }
        match &self.repr {
            Repr::Constant { height, .. } => Some(*height),
            Repr::Variable { cumulative } => {
                let size = cumulative[index + 1] - cumulative[index];
                Some(size as u32)
            }
        }
    }

    /// Sum of the heights of items `0..index`. `index` is clamped to the item count.
    pub fn cumulative_before(&self, index: usize) -> u64 {
        let index = index.min(self.count());
        match &self.repr {
            Repr::Constant { height, .. } => (*height as u64).saturating_mul(index as u64),
            Repr::Variable { cumulative } => cumulative[index],
        }
    }

    /// Total height spanned by the items in `range` (clamped to the item count).
    pub fn extent(&self, range: Range<usize>) -> u64 {
        self.cumulative_before(range.end)
            .saturating_sub(self.cumulative_before(range.start))
    }

    /// Returns the item containing `offset`, clamped to `0..count`.
    ///
    /// A boundary between two items belongs to the item starting there. Returns `None` for an
    /// empty list.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        match &self.repr {
            Repr::Constant { height, count } => {
                if *count == 0 {
                    return None;
                }
                let index = usize::try_from(offset / *height as u64).unwrap_or(usize::MAX);
                Some(index.min(*count - 1))
            }
            Repr::Variable { cumulative } => search::index_at_offset(cumulative, offset),
        }
    }

    /// Returns the last item that starts strictly before `offset` (item `0` for offset `0`).
    pub fn last_index_before(&self, offset: u64) -> Option<usize> {
        self.index_at_offset(offset.saturating_sub(1))
    }
}

fn prefix_sums(heights: &[u32]) -> Vec<u64> {
    let mut cumulative = Vec::with_capacity(heights.len() + 1);
    let mut total = 0u64;
    cumulative.push(total);
    for &height in heights {
        total = total.saturating_add(height as u64);
        cumulative.push(total);
    }
    cumulative
}
