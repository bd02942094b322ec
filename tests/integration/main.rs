//! Integration tests for folio

mod cli_test;
mod helpers;
mod intro_test;
mod render_test;
mod shell_test;
