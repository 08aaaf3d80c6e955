use core::fmt::Display;

use crate::prelude_internal::*;

/// Location of a node inside a value tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Plural, Default)]
pub struct ValuePath(pub Vec<PathSegment>);

impl ValuePath {
    /// Create an empty path representing the root value
    pub fn root() -> Self {
        ValuePath(Vec::new())
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push_key(&mut self, key: ObjectKey) {
        self.0.push(PathSegment::Key(key));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(PathSegment::Index(index));
    }

    pub fn pop_segment(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Map entry
    Key(ObjectKey),
    /// Sequence element
    Index(usize),
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i != 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
