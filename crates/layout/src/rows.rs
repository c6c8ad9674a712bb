//! Side-by-side transposition of a row of month blocks.

use crate::month::{MonthBlock, BLOCK_ROWS};

/// Interleaves a row of month blocks into printable lines.
///
/// Line `i` of the result is the concatenation, in month order, of line
/// `i` of every block in `row`. No separator is inserted; spacing is
/// already embedded in the blocks' fixed line widths. A partial row of
/// one or two blocks transposes only the columns present, yielding
/// proportionally narrower lines.
pub fn transpose(row: &[MonthBlock]) -> [String; BLOCK_ROWS] {
    std::array::from_fn(|i| {
        row.iter()
            .map(|block| block.lines()[i].as_str())
            .collect::<String>()
    })
}
