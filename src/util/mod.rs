// Utility Module
// File helpers shared by the menu workflows

pub mod file_ops;
