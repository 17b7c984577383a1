pub mod interpolation;
pub mod randomnumbers;
pub mod statistics;
