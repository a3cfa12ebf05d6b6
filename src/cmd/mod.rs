pub mod check;
pub mod costs;
pub mod grade;
