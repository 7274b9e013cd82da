//! Unit tests for the Yandex Market client.

mod models_tests;
