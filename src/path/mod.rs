//! The result type of a successful solve.

use crate::Cost;

/// An ordered sequence of steps with a total coin cost.
///
/// A solve produces a `Path<NodeID>` from the entrance to the exit, where
/// `cost` is the sum of all door prices paid along the way. Reconstruction
/// walks the predecessor chain from the exit backwards, so the storage may be
/// back to front; iteration transparently yields the steps in walking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    steps: Box<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// Creates a Path from steps already in walking order.
    pub fn new(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            steps: steps.into(),
            cost,
            is_reversed: false,
        }
    }

    /// Creates a Path from steps listed end to start.
    ///
    /// The steps are stored as given; iteration and indexing run back to
    /// front, so no buffer reversal ever happens.
    pub fn from_reversed(steps: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            steps: steps.into(),
            cost,
            is_reversed: true,
        }
    }

    /// The total coin cost of walking this Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps, both ends included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the Path has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns an Iterator over the steps in walking order.
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.steps.iter(),
            reversed: self.is_reversed,
        }
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.steps.len() - index - 1
        } else {
            index
        };
        &self.steps[index]
    }
}

/// A borrowing Iterator over the steps of a [`Path`].
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;
    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

/// A consuming Iterator over the steps of a [`Path`].
#[derive(Debug)]
pub struct IntoIter<P> {
    iter: std::vec::IntoIter<P>,
    reversed: bool,
}

impl<P> Iterator for IntoIter<P> {
    type Item = P;
    fn next(&mut self) -> Option<P> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
impl<P> ExactSizeIterator for IntoIter<P> {}
impl<P> std::iter::FusedIterator for IntoIter<P> {}

impl<P> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = IntoIter<P>;
    fn into_iter(self) -> IntoIter<P> {
        IntoIter {
            iter: self.steps.into_vec().into_iter(),
            reversed: self.is_reversed,
        }
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        // can't compare the slices directly because self might be reversed
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(fmt, "{}", first)?;
            for p in iter {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        } else {
            write!(fmt, "<empty>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 42);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn reversed_construction() {
        let path = Path::from_reversed(vec![0, 2, 4], 42);

        assert_eq!(path[0], 4);
        assert_eq!(path[2], 0);
        assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec![4, 2, 0]);
        assert_eq!(path.into_iter().collect::<Vec<_>>(), vec![4, 2, 0]);
    }

    #[test]
    fn display() {
        let path = Path::from_reversed(vec![0, 2, 4], 42);

        assert_eq!(&format!("{}", path), "Path[Cost = 42]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
