//! Multi-dimensional fee complexity

use std::{fmt, ops::Index};

use crate::errors::ComplexityError;

/// Axis of a complexity vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FeeDimension {
    Bandwidth,
    DBRead,
    DBWrite,
    Compute,
}

impl FeeDimension {
    /// All axes, in canonical order
    pub const ALL: [FeeDimension; 4] = [
        FeeDimension::Bandwidth,
        FeeDimension::DBRead,
        FeeDimension::DBWrite,
        FeeDimension::Compute,
    ];
}

impl fmt::Display for FeeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeDimension::Bandwidth => write!(f, "Bandwidth"),
            FeeDimension::DBRead => write!(f, "DBRead"),
            FeeDimension::DBWrite => write!(f, "DBWrite"),
            FeeDimension::Compute => write!(f, "Compute"),
        }
    }
}

/// Resource cost of a transaction along each fee dimension
///
/// Values are only ever combined by checked addition, so a vector is never mutated in place
/// and an overflow surfaces as [`ComplexityError::Overflow`] instead of wrapping.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub bandwidth: u64,
    pub db_read: u64,
    pub db_write: u64,
    pub compute: u64,
}

impl Dimensions {
    pub const ZERO: Dimensions = Dimensions::new(0, 0, 0, 0);

    pub const fn new(bandwidth: u64, db_read: u64, db_write: u64, compute: u64) -> Self {
        Self {
            bandwidth,
            db_read,
            db_write,
            compute,
        }
    }

    /// Bandwidth-only vector
    pub const fn bandwidth(bandwidth: u64) -> Self {
        Self::new(bandwidth, 0, 0, 0)
    }

    pub fn get(&self, dimension: FeeDimension) -> u64 {
        match dimension {
            FeeDimension::Bandwidth => self.bandwidth,
            FeeDimension::DBRead => self.db_read,
            FeeDimension::DBWrite => self.db_write,
            FeeDimension::Compute => self.compute,
        }
    }

    /// Elementwise sum
    pub fn checked_add(&self, other: &Dimensions) -> Result<Dimensions, ComplexityError> {
        let add = |a: u64, b: u64, dimension: FeeDimension| {
            a.checked_add(b).ok_or(ComplexityError::Overflow { dimension })
        };
        Ok(Dimensions {
            bandwidth: add(self.bandwidth, other.bandwidth, FeeDimension::Bandwidth)?,
            db_read: add(self.db_read, other.db_read, FeeDimension::DBRead)?,
            db_write: add(self.db_write, other.db_write, FeeDimension::DBWrite)?,
            compute: add(self.compute, other.compute, FeeDimension::Compute)?,
        })
    }

    pub fn checked_add_bandwidth(&self, bandwidth: u64) -> Result<Dimensions, ComplexityError> {
        self.checked_add(&Dimensions::bandwidth(bandwidth))
    }

    /// Sum of any number of vectors; the empty sum is [`Dimensions::ZERO`]
    pub fn checked_sum<'a, I>(iter: I) -> Result<Dimensions, ComplexityError>
    where
        I: IntoIterator<Item = &'a Dimensions>,
    {
        iter.into_iter().try_fold(Dimensions::ZERO, |acc, d| acc.checked_add(d))
    }
}

impl Index<FeeDimension> for Dimensions {
    type Output = u64;

    fn index(&self, dimension: FeeDimension) -> &u64 {
        match dimension {
            FeeDimension::Bandwidth => &self.bandwidth,
            FeeDimension::DBRead => &self.db_read,
            FeeDimension::DBWrite => &self.db_write,
            FeeDimension::Compute => &self.compute,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[bandwidth={}, db_read={}, db_write={}, compute={}]",
            self.bandwidth, self.db_read, self.db_write, self.compute
        )
    }
}

/// Adds all the given vectors together
pub fn add_dimensions(dimensions: &[Dimensions]) -> Result<Dimensions, ComplexityError> {
    Dimensions::checked_sum(dimensions)
}
