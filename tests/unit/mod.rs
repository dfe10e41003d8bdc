//! Integration test modules.

mod idt_workflow_test;
mod legacy_data_test;
mod reset_config_test;
mod training_summary_test;
