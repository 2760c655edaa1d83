use std::cmp::Ordering;

pub trait KeyComparator<T> {
    fn compare(&self, compare: &T, another: &T) -> Ordering;
}

// any closure with the right shape works as a comparator
impl<T, F> KeyComparator<T> for F where
    F: Fn(&T, &T) -> Ordering {
    fn compare(&self, compare: &T, another: &T) -> Ordering {
        self(compare, another)
    }
}

pub struct NaturalOrder {}

impl<T: Ord> KeyComparator<T> for NaturalOrder {
    fn compare(&self, compare: &T, another: &T) -> Ordering {
        return compare.cmp(another);
    }
}

pub struct ReverseOrder {}

impl<T: Ord> KeyComparator<T> for ReverseOrder {
    fn compare(&self, compare: &T, another: &T) -> Ordering {
        return another.cmp(compare);
    }
}

pub struct I32Comparator {}

impl KeyComparator<i32> for I32Comparator {
    fn compare(&self, compare: &i32, another: &i32) -> Ordering {
        return compare.cmp(another)
    }
}
