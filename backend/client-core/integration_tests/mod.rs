mod client_errors;
mod http_tests;
