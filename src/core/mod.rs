pub mod grid;
pub mod kinematics;
pub mod linkage;
pub mod report;
pub mod sweep;
pub mod validation;
pub mod window;
