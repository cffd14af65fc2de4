pub mod input;
pub use input::{read_input, read_lines};

pub mod solution;
pub use solution::{Answer, Day, Part};

pub mod days;

pub mod config;

pub mod scaffold;

pub mod cmd;

pub mod logging;

#[cfg(test)]
mod test;
