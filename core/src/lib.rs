pub mod batch;
pub mod square;

pub use batch::{Squared, square_all};
pub use square::{MAX_SAFE_INPUT, SquareError, is_safe, square, square_with};
