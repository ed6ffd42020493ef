use quickcheck::{Arbitrary, Gen};

mod heaps;
mod trees;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert one instance of the value
    Insert(T),
    /// Remove one instance of the value
    Remove(T),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    /// Tells quickcheck how to randomly choose an operation.
    /// Inserts are twice as likely so that trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 | 1 => Op::Insert(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
