pub mod enums;
pub mod interestrate;
