use serde::{Deserialize, Serialize};

/// Reasons a grid cannot carry a boundary loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// One of the axes has fewer than two pixels.
    DegenerateDimension { width: usize, height: usize },
    /// Lattice coordinates must fit an `i32`.
    DimensionTooLarge { width: usize, height: usize },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::DegenerateDimension { width, height } => write!(
                f,
                "grid {width}x{height} has no boundary loop (need both sides ≥ 2)"
            ),
            BoundaryError::DimensionTooLarge { width, height } => {
                write!(f, "grid {width}x{height} exceeds the i32 lattice range")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Immutable grid size `W×H`, both at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimension")]
pub struct Dimension {
    width: usize,
    height: usize,
}

#[derive(Deserialize)]
struct RawDimension {
    width: usize,
    height: usize,
}

impl TryFrom<RawDimension> for Dimension {
    type Error = BoundaryError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        Dimension::new(raw.width, raw.height)
    }
}

impl Dimension {
    pub fn new(width: usize, height: usize) -> Result<Self, BoundaryError> {
        if width < 2 || height < 2 {
            return Err(BoundaryError::DegenerateDimension { width, height });
        }
        // Projected endpoints reach `W + H` past the far side.
        let limit = (i32::MAX / 4) as usize;
        if width > limit || height > limit {
            return Err(BoundaryError::DimensionTooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of boundary points, corners counted once: `2(W+H) - 4`.
    #[inline]
    pub fn perimeter(&self) -> usize {
        2 * (self.width + self.height) - 4
    }

    #[inline]
    pub(crate) fn w(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub(crate) fn h(&self) -> i32 {
        self.height as i32
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
