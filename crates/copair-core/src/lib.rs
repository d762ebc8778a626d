pub mod grouping;
pub mod pairing;

pub use grouping::group_by_instance;
pub use pairing::{enumerate_pairs, filter_by_minimum, tally_pairs};
