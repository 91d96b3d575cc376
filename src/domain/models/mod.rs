pub mod run;
pub mod stats;
pub mod status;
pub mod workflow_group;
