mod common;
mod options;
mod service;
mod wizard;
