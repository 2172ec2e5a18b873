//! Integration tests for the volant CLI and library.

mod dump_test;
mod layout_test;
mod library_test;
mod term_test;
