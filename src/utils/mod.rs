//! Utils module split into submodules

mod digits;
mod errors;
mod partitions;

pub use digits::{digits_to_string, extract_digits};
pub use errors::InputError;
pub use partitions::{
    Group, MAX_GROUP_VALUE, MAX_GROUP_WIDTH, MAX_GROUPS_LIMIT, Partition, generate_partitions,
};
