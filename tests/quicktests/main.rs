use quickcheck::{Arbitrary, Gen};

mod tree;

/// Things to do to a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value with the iterative walk
    Insert(T),
    /// Insert the value with the recursive walk
    InsertRecursively(T),
    /// Remove the value from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::InsertRecursively(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
