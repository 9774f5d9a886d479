//! The two address-resolution passes over one file's classified lines, plus
//! the addressing-mode legality check the first pass applies to every
//! command.

pub mod addressing;
pub mod first_pass;
pub mod second_pass;
