/// argmax returns the index of the maximum value in the array x. The first
/// occurrence wins if the maximum appears several times.
pub fn argmax<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> usize {
    let mut idx_max = 0;
    let mut val_max = x[0];

    for (i, &val) in x.iter().enumerate().skip(1) {
        if val > val_max {
            val_max = val;
            idx_max = i;
        }
    }

    idx_max
}

/// mean returns the arithmetic mean of the array x (0.0 for an empty array).
pub fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }

    x.iter().sum::<f64>() / x.len() as f64
}

#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// argsort returns the indices that would sort an array. The underlying sort
/// is stable, i.e., equal elements keep their original relative order.
pub fn argsort<T: std::cmp::PartialOrd>(x: &[T], order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..x.len()).collect();
    match order {
        SortOrder::Ascending => indices.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap()),
        SortOrder::Descending => indices.sort_by(|&a, &b| x[b].partial_cmp(&x[a]).unwrap()),
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_first_occurrence_wins() {
        assert_eq!(argmax(&[1.0, 3.0, 2.0]), 1);
        assert_eq!(argmax(&[5.0, 5.0, 1.0]), 0);
        assert_eq!(argmax(&[-2, -1, -3]), 1);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_argsort_ascending_is_stable() {
        // equal keys must keep their original relative order
        let keys = [(1u8, 0.0), (0u8, 12.5), (0u8, 12.5), (0u8, 10.0)];
        assert_eq!(argsort(&keys, SortOrder::Ascending), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_argsort_descending() {
        assert_eq!(argsort(&[1.0, 3.0, 2.0], SortOrder::Descending), vec![1, 2, 0]);
    }
}
