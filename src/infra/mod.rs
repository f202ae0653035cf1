//! Outside-world inputs: the suggestion feed.

pub mod feed;
