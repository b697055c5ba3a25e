mod api;
mod config;
mod support;
