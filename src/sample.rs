//! Reading instances from files and data frames,
//! and splitting them into training/test sets.

// Provides a struct that reads a CSV file.
pub(crate) mod reader;
// Provides the conversion from `polars` data frames.
pub(crate) mod dataframe;
// Provides the random training/test split.
pub(crate) mod split;


pub use reader::InstanceReader;
pub use dataframe::from_dataframe;
pub use split::{train_test_split, DEFAULT_TRAIN_RATIO};
