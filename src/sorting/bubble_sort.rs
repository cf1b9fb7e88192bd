pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in (1..n).rev() {
        for j in 0..i {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}
