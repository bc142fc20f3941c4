pub mod catalog;
pub mod matches;
pub mod run;
