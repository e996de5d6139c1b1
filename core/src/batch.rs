use square_common::policy::OverflowPolicy;
use tracing::debug;

use crate::square::{SquareError, square_with};

/// One evaluated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squared {
    pub input: i64,
    pub result: Result<i64, SquareError>,
}

impl Squared {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Squares every value in order. A failing value does not stop the rest.
pub fn square_all(values: &[i64], policy: OverflowPolicy) -> Vec<Squared> {
    values
        .iter()
        .map(|&input| {
            let result = square_with(input, policy);
            if let Err(e) = &result {
                debug!(input, %policy, "{e}");
            }
            Squared { input, result }
        })
        .collect()
}
