// src/application/commands/staff/mod.rs
mod assign;
mod list;
mod remove;
mod service;

pub use assign::AssignStaffCommand;
pub use service::StaffCommandService;
