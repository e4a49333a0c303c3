//! Indexer layer tests
//!
//! Section segmentation scenarios and search corpus properties.

mod test_scenarios;
