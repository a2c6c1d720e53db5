pub mod jma;
