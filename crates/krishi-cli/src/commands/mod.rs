pub mod estimate;
pub mod recommend;
pub mod run;
pub mod tables;
