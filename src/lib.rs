pub mod codec;
pub mod inspect;
pub mod logging;
pub mod shared;

#[cfg(test)]
mod logging_test;
