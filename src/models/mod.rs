pub mod book;
pub mod outcome;
pub mod responses;
pub mod storage;
