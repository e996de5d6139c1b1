#![cfg(test)]

mod squaring;
