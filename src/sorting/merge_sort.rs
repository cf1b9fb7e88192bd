pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() <= 1 {
        return arr.to_vec();
    }
    let mid = arr.len() / 2;
    let left = merge_sort(&arr[..mid]);
    let right = merge_sort(&arr[mid..]);
    merge(&left, &right)
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_a_sorted_copy() {
        let data = [3, 1, 2];
        assert_eq!(merge_sort(&data), vec![1, 2, 3]);
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn merges_uneven_halves() {
        assert_eq!(
            merge_sort(&[38, 27, 43, 3, 9, 82, 10]),
            vec![3, 9, 10, 27, 38, 43, 82]
        );
        assert_eq!(merge_sort::<i32>(&[]), Vec::<i32>::new());
        assert_eq!(merge_sort(&[7]), vec![7]);
    }
}
