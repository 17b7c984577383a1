pub mod pipeline;
pub mod records;
