pub mod countdown;
pub mod schedule;
