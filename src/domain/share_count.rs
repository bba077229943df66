//! `ShareCount` newtype for the split configuration

use anyhow::{Result, bail};

/// Number of shares to create (2..=255)
///
/// The maximum of 255 is the number of nonzero x-coordinates in GF(2^8);
/// the minimum of 2 follows from the threshold floor, since a threshold of
/// at least 2 can never be met by a single share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 2;

    /// Maximum valid share count (255 nonzero field elements)
    pub const MAX: u8 = 255;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shatter::domain::ShareCount;
    ///
    /// // Valid share counts (2-255)
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 255);
    ///
    /// // Invalid: fewer than 2 shares cannot meet any threshold
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(1).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least {} (got {value})", Self::MIN);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
