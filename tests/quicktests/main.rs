#[macro_use]
extern crate quickcheck_macros;

mod tree;

pub(crate) use op::Op;
