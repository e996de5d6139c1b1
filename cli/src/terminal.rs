pub mod colors;
pub mod logging;
pub mod print;

#[cfg(test)]
pub mod testing;
