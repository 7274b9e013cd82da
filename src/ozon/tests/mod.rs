//! Unit tests for the Ozon client.

mod catalog_tests;
