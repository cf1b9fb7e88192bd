pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

// Lomuto scheme keyed on the first element.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let mut swap_index = 0;
    for i in 1..arr.len() {
        if arr[i] < arr[0] {
            swap_index += 1;
            arr.swap(swap_index, i);
        }
    }
    arr.swap(0, swap_index);
    swap_index
}
