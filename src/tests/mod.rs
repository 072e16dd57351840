mod arrays;
mod config;
mod support;
