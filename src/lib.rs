pub mod skiplist;
pub mod comparator;
pub mod errors;
pub mod opts;
pub mod logger;

pub use crate::comparator::{KeyComparator, NaturalOrder, ReverseOrder};
pub use crate::errors::{Error, Result};
pub use crate::opts::SkipListOptions;
pub use crate::skiplist::SkipList;

#[macro_use] extern crate log;
extern crate simplelog;
