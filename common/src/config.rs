use crate::policy::OverflowPolicy;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// What to do when a square does not fit in an `i64`.
    pub overflow: OverflowPolicy,
    /// 0 prints everything, 1 drops the decoration, 2 prints bare results.
    pub quiet: u8,
    pub no_banner: bool,
}
