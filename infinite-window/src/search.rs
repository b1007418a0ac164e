/// Maps an offset to the item containing it, given a cumulative-height sequence.
///
/// `cumulative` holds `n + 1` ascending prefix sums with `cumulative[0] == 0` and
/// `cumulative[n]` the total height. Returns the index `i` in `0..n` with
/// `cumulative[i] <= offset < cumulative[i + 1]`, so a boundary belongs to the item that starts
/// there. Offset `0` maps to item `0`; offsets at or past the total map to item `n - 1`.
///
/// Returns `None` when the sequence describes zero items. Runs in `O(log n)`.
pub fn index_at_offset(cumulative: &[u64], offset: u64) -> Option<usize> {
    let n = cumulative.len().checked_sub(1)?;
    if n == 0 {
        return None;
    }
    if offset == 0 {
        return Some(0);
    }

    // Count the item ends that lie at or before `offset`; that many items are fully consumed.
    let consumed = cumulative[1..].partition_point(|&end| end <= offset);
    Some(consumed.min(n - 1))
}
