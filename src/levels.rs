//! Heading levels and the whitelist of levels captured in a table of contents.

use crate::error::LevelError;
use std::fmt;

const MARKERS: &str = "######";

/// A validated markdown heading depth, `1` (`#`) through `6` (`######`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Validate a user-supplied level.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mdtoc::levels::HeadingLevel;
    /// assert_eq!(HeadingLevel::new(2).unwrap().marker(), "##");
    /// assert!(HeadingLevel::new(7).is_err());
    /// assert!(HeadingLevel::new(0).is_err());
    /// ```
    pub fn new(level: i64) -> Result<Self, LevelError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(LevelError::OutOfRange(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The run of hashes that opens a heading of this depth.
    pub fn marker(self) -> &'static str {
        &MARKERS[..usize::from(self.0)]
    }

    /// Parse a heading marker token. Only a bare run of one to six hashes matches.
    pub fn from_marker(token: &str) -> Option<Self> {
        if token.is_empty() || token.len() > MARKERS.len() || !token.bytes().all(|b| b == b'#') {
            return None;
        }
        Some(Self(token.len() as u8))
    }

    fn bit(self) -> u8 {
        1 << (self.0 - 1)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// The set of heading depths captured by extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevelSet {
    mask: u8,
}

impl Default for HeadingLevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl HeadingLevelSet {
    /// Every level from `#` to `######`.
    pub fn all() -> Self {
        Self { mask: 0b11_1111 }
    }

    /// Build a set from validated levels. Falls back to [`HeadingLevelSet::all`]
    /// when `levels` is empty, so a resolved set is never empty.
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = HeadingLevel>,
    {
        let mask = levels.into_iter().fold(0, |mask, level| mask | level.bit());
        if mask == 0 { Self::all() } else { Self { mask } }
    }

    /// Resolve a raw whitelist such as the one given with `-w 2 4`.
    ///
    /// Invalid entries are dropped and collected in [`Resolution::rejected`];
    /// if nothing valid remains the full set is used.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mdtoc::levels::HeadingLevelSet;
    /// let resolution = HeadingLevelSet::resolve(&[2, 9]);
    /// assert!(resolution.set.contains_marker("##"));
    /// assert!(!resolution.set.contains_marker("#"));
    /// assert_eq!(resolution.rejected.len(), 1);
    /// ```
    pub fn resolve(requested: &[i64]) -> Resolution {
        let mut levels = Vec::with_capacity(requested.len());
        let mut rejected = Vec::new();

        for &value in requested {
            match HeadingLevel::new(value) {
                Ok(level) => levels.push(level),
                Err(err) => rejected.push(err),
            }
        }

        Resolution {
            set: Self::from_levels(levels),
            rejected,
        }
    }

    pub fn contains(&self, level: HeadingLevel) -> bool {
        self.mask & level.bit() != 0
    }

    /// Whether `token` is exactly the marker of a member level.
    pub fn contains_marker(&self, token: &str) -> bool {
        HeadingLevel::from_marker(token).is_some_and(|level| self.contains(level))
    }

    pub fn iter(&self) -> impl Iterator<Item = HeadingLevel> + '_ {
        (HeadingLevel::MIN..=HeadingLevel::MAX)
            .map(HeadingLevel)
            .filter(move |level| self.contains(*level))
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl fmt::Display for HeadingLevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers: Vec<_> = self.iter().map(HeadingLevel::marker).collect();
        write!(f, "{{{}}}", markers.join(", "))
    }
}

/// Outcome of [`HeadingLevelSet::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub set: HeadingLevelSet,
    pub rejected: Vec<LevelError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        let markers: Vec<_> = HeadingLevelSet::all().iter().map(|l| l.marker()).collect();
        assert_eq!(markers, ["#", "##", "###", "####", "#####", "######"]);
    }

    #[test]
    fn test_from_marker() {
        assert_eq!(HeadingLevel::from_marker("###").map(HeadingLevel::get), Some(3));
        assert_eq!(HeadingLevel::from_marker("#######"), None);
        assert_eq!(HeadingLevel::from_marker("#Title"), None);
        assert_eq!(HeadingLevel::from_marker(""), None);
    }

    #[test]
    fn test_resolve_empty_request_is_default() {
        let resolution = HeadingLevelSet::resolve(&[]);
        assert_eq!(resolution.set, HeadingLevelSet::all());
        assert!(resolution.rejected.is_empty());
    }

    #[test]
    fn test_resolve_keeps_valid_levels() {
        let resolution = HeadingLevelSet::resolve(&[2, 4]);
        assert_eq!(resolution.set.len(), 2);
        assert!(resolution.set.contains_marker("##"));
        assert!(resolution.set.contains_marker("####"));
        assert!(!resolution.set.contains_marker("###"));
    }

    #[test]
    fn test_resolve_reports_every_invalid_value() {
        let resolution = HeadingLevelSet::resolve(&[0, 3, 7, -1]);
        assert_eq!(
            resolution.rejected,
            vec![
                LevelError::OutOfRange(0),
                LevelError::OutOfRange(7),
                LevelError::OutOfRange(-1),
            ]
        );
        assert_eq!(resolution.set.iter().collect::<Vec<_>>(), vec![HeadingLevel(3)]);
    }

    #[test]
    fn test_resolve_all_invalid_falls_back_to_default() {
        let resolution = HeadingLevelSet::resolve(&[8, 42]);
        assert_eq!(resolution.set, HeadingLevelSet::all());
        assert_eq!(resolution.rejected.len(), 2);
        assert!(!resolution.set.is_empty());
    }

    #[test]
    fn test_duplicate_levels_collapse() {
        let resolution = HeadingLevelSet::resolve(&[1, 1, 1]);
        assert_eq!(resolution.set.len(), 1);
    }

    #[test]
    fn test_display() {
        let set = HeadingLevelSet::resolve(&[1, 3]).set;
        assert_eq!(set.to_string(), "{#, ###}");
    }
}
