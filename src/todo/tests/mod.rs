//! Unit tests for the task-list pipeline.

mod transport_tests;
