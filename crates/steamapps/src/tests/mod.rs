//! Test suites for the application-service handler.

mod requests;
mod support;
