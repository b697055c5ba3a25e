mod address;
mod resources;
mod wallet;
