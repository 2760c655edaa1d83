use crate::errors::{Error, Result};

#[derive(Debug, Clone)]
pub struct SkipListOptions {
    // fixed seed for the coin flipper. None seeds from entropy, once per list.
    pub seed: Option<u64>,

    // upper bound on the number of levels holding real nodes.
    // a tower never gets more than max_height - 1 express levels
    pub max_height: usize,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        return SkipListOptions {
            seed: None,

            // 2^32 elements before the cap matters
            max_height: 32,
        }
    }
}

impl SkipListOptions {
    pub fn with_seed(seed: u64) -> Self {
        SkipListOptions {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_height == 0 {
            return Err(Error::InvalidOptions("max_height can't be 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::opts::SkipListOptions;

    #[test]
    fn default_is_valid() {
        assert!(SkipListOptions::default().validate().is_ok());
        assert_eq!(SkipListOptions::with_seed(7).seed, Some(7));
    }

    #[test]
    fn options_can_be_reused() {
        let opts = SkipListOptions::with_seed(3);
        let copy = opts.clone();
        assert_eq!(copy.seed, opts.seed);
        assert_eq!(copy.max_height, 32);
        assert!(format!("{:?}", copy).contains("max_height: 32"));
    }

    #[test]
    fn zero_height_rejected() {
        let opts = SkipListOptions { max_height: 0, ..Default::default() };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));
    }
}
