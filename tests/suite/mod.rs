mod classify;
mod config;
