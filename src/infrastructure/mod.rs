pub mod extraction;
pub mod observability;
pub mod persistence;
pub(crate) mod process;
pub mod storage;
pub mod synthesis;
pub mod translation;
