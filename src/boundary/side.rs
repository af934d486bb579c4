use serde::{Deserialize, Serialize};

/// One of the four straight edges of the grid, visited in the cyclic order
/// `Right → Top → Left → Bottom → Right`.
///
/// `y` grows upward: `Bottom` is the `y = 0` row, `Top` the `y = H-1` row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right = 0,
    Top = 1,
    Left = 2,
    Bottom = 3,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Right, Side::Top, Side::Left, Side::Bottom];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Side {
        Side::ALL[index % 4]
    }

    /// Side that follows this one in walk order.
    #[inline]
    pub fn next(self) -> Side {
        Side::from_index(self.index() + 1)
    }

    /// True for the sides running along the `x` axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Right => "right",
            Side::Top => "top",
            Side::Left => "left",
            Side::Bottom => "bottom",
        };
        f.write_str(name)
    }
}
