pub mod ranges_args;
pub mod zip_code;
pub mod zip_range;

pub use {
    ranges_args::RangesArgs,
    zip_code::ZipCode,
    zip_range::{print_ranges, ZipRange},
};
