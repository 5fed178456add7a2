mod fetchers;
mod integration;
