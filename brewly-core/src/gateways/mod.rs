pub mod maps;
pub mod storage;
