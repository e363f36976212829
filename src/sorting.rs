//! Comparison, divide-and-conquer, and heap sort simulations.
//!
//! Each generator records one step per pairwise comparison and one per
//! swap/shift, with strict inequalities throughout so equal elements never
//! trade places. Recursive algorithms return their local step contributions
//! and the caller concatenates them in real call order.

use crate::step::Step;

pub(crate) fn bubble_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting bubble sort", 0)];
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            steps.push(
                Step::array(
                    &array,
                    format!("Comparing {} and {}", array[j], array[j + 1]),
                    2,
                )
                .comparing(j, j + 1),
            );
            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                steps.push(
                    Step::array(
                        &array,
                        format!("Swapped {} and {}", array[j + 1], array[j]),
                        3,
                    )
                    .swapped(j, j + 1),
                );
            }
        }
    }
    steps.push(Step::array(&array, "Array is now sorted!", -1).sorted());
    steps
}

pub(crate) fn selection_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting selection sort", 0)];
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        steps.push(
            Step::array(&array, format!("Finding minimum from position {i}"), 1)
                .highlighting(vec![i]),
        );
        for j in i + 1..n {
            steps.push(
                Step::array(
                    &array,
                    format!("Comparing {} with {}", array[min_idx], array[j]),
                    3,
                )
                .comparing(min_idx, j),
            );
            if array[j] < array[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            array.swap(i, min_idx);
            steps.push(
                Step::array(
                    &array,
                    format!("Swapped {} with {}", array[min_idx], array[i]),
                    5,
                )
                .swapped(i, min_idx),
            );
        }
    }
    steps.push(Step::array(&array, "Array is sorted!", -1).sorted());
    steps
}

pub(crate) fn insertion_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting insertion sort", 0)];
    for i in 1..array.len() {
        let key = array[i];
        let mut j = i;
        steps.push(
            Step::array(&array, format!("Inserting {key} into sorted portion"), 1)
                .highlighting(vec![i]),
        );
        while j > 0 && array[j - 1] > key {
            array[j] = array[j - 1];
            steps.push(
                Step::array(&array, format!("Shifting {} to the right", array[j - 1]), 4)
                    .comparing(j - 1, j),
            );
            j -= 1;
        }
        array[j] = key;
        steps.push(
            Step::array(&array, format!("Placed {key} at position {j}"), 6).highlighting(vec![j]),
        );
    }
    steps.push(Step::array(&array, "Array is sorted!", -1).sorted());
    steps
}

pub(crate) fn merge_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting merge sort", 0)];
    if !array.is_empty() {
        let right = array.len() - 1;
        steps.extend(merge_sort_range(&mut array, 0, right));
    }
    steps.push(Step::array(&array, "Merge Sort complete!", -1).sorted());
    steps
}

fn merge_sort_range(array: &mut Vec<i64>, left: usize, right: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    if left < right {
        let mid = (left + right) / 2;
        steps.push(
            Step::array(array, format!("Dividing array at position {mid}"), 2)
                .highlighting((left..=right).collect()),
        );
        steps.extend(merge_sort_range(array, left, mid));
        steps.extend(merge_sort_range(array, mid + 1, right));
        steps.extend(merge(array, left, mid, right));
    }
    steps
}

fn merge(array: &mut Vec<i64>, left: usize, mid: usize, right: usize) -> Vec<Step> {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();
    let mut steps = vec![
        Step::array(
            array,
            format!("Merging subarrays [{left}..{mid}] and [{}..{right}]", mid + 1),
            5,
        )
        .highlighting((left..=right).collect()),
    ];
    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            array[k] = left_run[i];
            i += 1;
        } else {
            array[k] = right_run[j];
            j += 1;
        }
        steps.push(
            Step::array(array, format!("Placing {} at position {k}", array[k]), 5)
                .highlighting(vec![k]),
        );
        k += 1;
    }
    while i < left_run.len() {
        array[k] = left_run[i];
        i += 1;
        k += 1;
    }
    while j < right_run.len() {
        array[k] = right_run[j];
        j += 1;
        k += 1;
    }
    steps
}

pub(crate) fn quick_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting quick sort", 0)];
    if !array.is_empty() {
        let high = array.len() - 1;
        steps.extend(quick_sort_range(&mut array, 0, high));
    }
    steps.push(Step::array(&array, "Quick Sort complete!", -1).sorted());
    steps
}

fn quick_sort_range(array: &mut Vec<i64>, low: usize, high: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    if low < high {
        let (partition_steps, pivot_index) = partition(array, low, high);
        steps.extend(partition_steps);
        if pivot_index > low {
            steps.extend(quick_sort_range(array, low, pivot_index - 1));
        }
        steps.extend(quick_sort_range(array, pivot_index + 1, high));
    }
    steps
}

// Lomuto partition: last element is the pivot, `i` tracks the insertion
// point for values below it.
fn partition(array: &mut Vec<i64>, low: usize, high: usize) -> (Vec<Step>, usize) {
    let pivot = array[high];
    let mut steps =
        vec![Step::array(array, format!("Pivot selected: {pivot}"), 2).highlighting(vec![high])];
    let mut i = low;
    for j in low..high {
        steps.push(
            Step::array(
                array,
                format!("Comparing {} with pivot {pivot}", array[j]),
                3,
            )
            .comparing(j, high),
        );
        if array[j] < pivot {
            array.swap(i, j);
            if i != j {
                steps.push(
                    Step::array(array, format!("Swapped {} and {}", array[j], array[i]), 4)
                        .swapped(i, j),
                );
            }
            i += 1;
        }
    }
    array.swap(i, high);
    steps.push(
        Step::array(array, format!("Placed pivot {pivot} at position {i}"), 4).swapped(i, high),
    );
    (steps, i)
}

pub(crate) fn heap_sort(numbers: &[i64]) -> Vec<Step> {
    let mut array = numbers.to_vec();
    let mut steps = vec![Step::array(&array, "Starting heap sort", 0)];
    let n = array.len();
    for i in (0..n / 2).rev() {
        steps.extend(heapify(&mut array, n, i));
    }
    for i in (1..n).rev() {
        array.swap(0, i);
        steps.push(
            Step::array(&array, format!("Moved {} to sorted position", array[i]), 2).swapped(0, i),
        );
        steps.extend(heapify(&mut array, i, 0));
    }
    steps.push(Step::array(&array, "Heap Sort complete!", -1).sorted());
    steps
}

fn heapify(array: &mut Vec<i64>, n: usize, i: usize) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < n && array[left] > array[largest] {
        largest = left;
    }
    if right < n && array[right] > array[largest] {
        largest = right;
    }
    if largest != i {
        array.swap(i, largest);
        steps.push(
            Step::array(
                array,
                format!("Heapifying: swapped {} and {}", array[largest], array[i]),
                4,
            )
            .swapped(i, largest),
        );
        steps.extend(heapify(array, n, largest));
    }
    steps
}
