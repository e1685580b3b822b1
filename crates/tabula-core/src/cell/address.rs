//! Column codes, cell references and ranges
//!
//! Public functions in this module take 1-based ordinals, the way a sheet
//! layout counts columns and rows. [`CellAddress`] and [`CellRange`] store
//! 0-based indices internally and render as A1 notation.

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

const RADIX: u32 = 26;

/// Convert a 1-based column ordinal to its letter code (1 = A, 27 = AA)
///
/// Column codes form a bijective base-26 numeral system: digits run from 1
/// to 26 and there is no zero digit.
///
/// # Examples
/// ```
/// use tabula_core::cell::column_code;
///
/// assert_eq!(column_code(1).unwrap(), "A");
/// assert_eq!(column_code(52).unwrap(), "AZ");
/// assert_eq!(column_code(703).unwrap(), "AAA");
/// assert!(column_code(0).is_err());
/// ```
pub fn column_code(ordinal: u32) -> Result<String> {
    if ordinal == 0 {
        return Err(Error::invalid_argument("column ordinal must be >= 1"));
    }

    let mut digits: Vec<u8> = Vec::new();
    let mut n = ordinal;
    while n > 0 {
        let mut rem = n % RADIX;
        n /= RADIX;
        if rem == 0 {
            rem = RADIX;
            n -= 1;
        }
        digits.push(rem as u8);
    }

    Ok(digits
        .iter()
        .rev()
        .map(|&d| (b'A' + d - 1) as char)
        .collect())
}

/// Convert a column letter code back to its 1-based ordinal (A = 1, AA = 27)
///
/// Lowercase letters are accepted.
pub fn column_ordinal(code: &str) -> Result<u32> {
    if code.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut ordinal: u32 = 0;
    for c in code.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        ordinal = ordinal
            .checked_mul(RADIX)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(format!("column '{}' is too large", code)))?;
    }

    Ok(ordinal)
}

/// Build an A1-style reference from 1-based column and row ordinals
///
/// ```
/// use tabula_core::cell::cell_ref;
///
/// assert_eq!(cell_ref(28, 12).unwrap(), "AB12");
/// ```
pub fn cell_ref(col: u32, row: u32) -> Result<String> {
    if row == 0 {
        return Err(Error::invalid_argument("row ordinal must be >= 1"));
    }
    Ok(format!("{}{}", column_code(col)?, row))
}

/// Build the merge range covering `colspan` columns starting at `col` on `row`
///
/// ```
/// use tabula_core::cell::merge_range;
///
/// assert_eq!(merge_range(3, 4, 2).unwrap(), "C2:F2");
/// ```
pub fn merge_range(col: u32, colspan: u32, row: u32) -> Result<String> {
    if colspan == 0 {
        return Err(Error::invalid_argument("colspan must be >= 1"));
    }
    let last = col
        .checked_add(colspan - 1)
        .ok_or_else(|| Error::invalid_argument("merge range overflows the column space"))?;
    Ok(format!("{}:{}", cell_ref(col, row)?, cell_ref(last, row)?))
}

/// A cell address (e.g., "A1")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based indices
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Create a cell address from 1-based column and row ordinals
    pub fn from_ordinals(col: u32, row: u32) -> Result<Self> {
        if col == 0 || row == 0 {
            return Err(Error::invalid_argument(format!(
                "ordinals must be >= 1 (column {}, row {})",
                col, row
            )));
        }
        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }
        Ok(Self::new(row - 1, col - 1))
    }

    /// Parse a cell address from A1-style notation
    ///
    /// Absolute markers (`$`) are accepted and ignored.
    ///
    /// # Examples
    /// ```
    /// use tabula_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let cleaned: String = s.chars().filter(|&c| c != '$').collect();
        let split = cleaned
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(cleaned.len());
        let (letters, digits) = cleaned.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = column_ordinal(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Self::from_ordinals(col, row)
    }

    /// 1-based column ordinal
    pub fn col_ordinal(&self) -> u32 {
        self.col + 1
    }

    /// 1-based row ordinal
    pub fn row_ordinal(&self) -> u32 {
        self.row + 1
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut n = self.col + 1;
        let mut letters = Vec::new();
        while n > 0 {
            n -= 1;
            letters.push((b'A' + (n % RADIX) as u8) as char);
            n /= RADIX;
        }
        letters.iter().rev().collect::<String>() + &(self.row + 1).to_string()
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so `start` is the top-left corner
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(':') {
            Some((start, end)) => {
                let start = CellAddress::parse(start)
                    .map_err(|_| Error::InvalidRange(s.to_string()))?;
                let end =
                    CellAddress::parse(end).map_err(|_| Error::InvalidRange(s.to_string()))?;
                Ok(Self::new(start, end))
            }
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start, self.end)
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_column_code() {
        assert_eq!(column_code(1).unwrap(), "A");
        assert_eq!(column_code(2).unwrap(), "B");
        assert_eq!(column_code(26).unwrap(), "Z");
        assert_eq!(column_code(27).unwrap(), "AA");
        assert_eq!(column_code(52).unwrap(), "AZ");
        assert_eq!(column_code(53).unwrap(), "BA");
        assert_eq!(column_code(702).unwrap(), "ZZ");
        assert_eq!(column_code(703).unwrap(), "AAA");
        assert_eq!(column_code(16384).unwrap(), "XFD"); // Max Excel column
        assert_eq!(column_code(18278).unwrap(), "ZZZ");
    }

    #[test]
    fn test_column_code_rejects_zero() {
        assert!(matches!(column_code(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_column_ordinal() {
        assert_eq!(column_ordinal("A").unwrap(), 1);
        assert_eq!(column_ordinal("Z").unwrap(), 26);
        assert_eq!(column_ordinal("AA").unwrap(), 27);
        assert_eq!(column_ordinal("XFD").unwrap(), 16384);

        // Case insensitive
        assert_eq!(column_ordinal("az").unwrap(), 52);

        assert!(column_ordinal("").is_err());
        assert!(column_ordinal("A1").is_err());
    }

    #[test]
    fn test_codec_roundtrip_exhaustive() {
        for n in 1..=18278 {
            let code = column_code(n).unwrap();
            assert_eq!(column_ordinal(&code).unwrap(), n, "code {}", code);
        }
    }

    proptest! {
        #[test]
        fn prop_column_code_is_bijective(n in 1u32..=1_000_000) {
            let code = column_code(n).unwrap();
            prop_assert!(code.chars().all(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(column_ordinal(&code).unwrap(), n);
        }
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(1, 1).unwrap(), "A1");
        assert_eq!(cell_ref(28, 12).unwrap(), "AB12");
        assert!(matches!(cell_ref(0, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(cell_ref(1, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_merge_range() {
        assert_eq!(merge_range(3, 4, 2).unwrap(), "C2:F2");
        assert_eq!(merge_range(1, 3, 1).unwrap(), "A1:C1");
        assert_eq!(merge_range(26, 2, 7).unwrap(), "Z7:AA7");
        assert!(merge_range(1, 0, 1).is_err());
        assert!(merge_range(1, 2, 0).is_err());
    }

    #[test]
    fn test_cell_address_parse() {
        let addr = CellAddress::parse("A1").unwrap();
        assert_eq!(addr, CellAddress::new(0, 0));

        let addr = CellAddress::parse("$C$10").unwrap();
        assert_eq!(addr, CellAddress::new(9, 2));
        assert_eq!(addr.col_ordinal(), 3);
        assert_eq!(addr.row_ordinal(), 10);

        assert!(CellAddress::parse("").is_err());
        assert!(CellAddress::parse("A").is_err());
        assert!(CellAddress::parse("1").is_err());
        assert!(CellAddress::parse("A0").is_err());
        assert!(CellAddress::parse("XFE1").is_err());
    }

    #[test]
    fn test_cell_address_display() {
        assert_eq!(CellAddress::new(0, 0).to_string(), "A1");
        assert_eq!(CellAddress::new(99, 2).to_string(), "C100");
        assert_eq!(CellAddress::new(0, 26).to_string(), "AA1");
    }

    #[test]
    fn test_cell_range_parse() {
        let range = CellRange::parse("C2:F2").unwrap();
        assert_eq!(range.start, CellAddress::new(1, 2));
        assert_eq!(range.end, CellAddress::new(1, 5));
        assert_eq!(range.col_count(), 4);
        assert_eq!(range.to_string(), "C2:F2");

        // Reversed corners normalize
        let range = CellRange::parse("B4:A1").unwrap();
        assert_eq!(range.to_string(), "A1:B4");

        assert!(matches!(
            CellRange::parse("A1:"),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn test_cell_range_overlaps() {
        let a = CellRange::parse("A1:C1").unwrap();
        let b = CellRange::parse("C1:D1").unwrap();
        let c = CellRange::parse("A2:C2").unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.contains(&CellAddress::new(0, 1)));
    }
}
