use std::{fmt, num::ParseIntError, str::FromStr};

/// Server-assigned, unique identifier of a comment.
///
/// Ids are handed out by the storage layer in ascending order
/// and are never reused, i.e. the id order equals the insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(u64);

impl CommentId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CommentId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<u32> for CommentId {
    fn from(from: u32) -> Self {
        Self(from.into())
    }
}

impl From<CommentId> for u64 {
    fn from(from: CommentId) -> Self {
        from.0
    }
}

impl FromStr for CommentId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: CommentId = "42".parse().unwrap();
        assert_eq!(CommentId::new(42), id);
        assert_eq!("42", id.to_string());
        assert!("-1".parse::<CommentId>().is_err());
        assert!("".parse::<CommentId>().is_err());
    }
}
