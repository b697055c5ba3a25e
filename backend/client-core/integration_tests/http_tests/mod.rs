mod helpers;
mod operations;
mod transport;
