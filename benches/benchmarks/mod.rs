pub mod hierarchy_benchmark;
pub mod outcomespace_size_benchmark;
