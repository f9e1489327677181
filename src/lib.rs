pub mod archive;
pub mod data;
pub mod recurrence;
