pub mod seed_utils;
pub mod startup_utils;
