#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Calculating,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_variants_are_distinct() {
        assert_ne!(AppMode::Calculating, AppMode::Quit);
    }
}
