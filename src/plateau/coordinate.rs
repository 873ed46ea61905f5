use std::fmt;

/// One axis value on the plateau grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate(i32);

impl Coordinate {
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Step one square towards larger values
    #[inline]
    pub fn up(&mut self) {
        // wraps so stepping past i32::MAX lands off the plateau
        self.0 = self.0.wrapping_add(1);
    }

    /// Step one square towards smaller values
    #[inline]
    pub fn down(&mut self) {
        self.0 = self.0.wrapping_sub(1);
    }
}

impl From<i32> for Coordinate {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
