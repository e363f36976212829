//! Linear, binary, and jump search simulations.
//!
//! The last input element is the search target and the remainder is the
//! haystack. Binary and jump search sort the haystack ascending before any
//! step is emitted; the sorted order is what every snapshot displays.

use crate::step::Step;

pub(crate) fn linear_search(numbers: &[i64]) -> Vec<Step> {
    let Some((&target, array)) = numbers.split_last() else {
        return vec![Step::array(&[], "No search target provided", -1)];
    };
    let mut steps = vec![Step::array(
        array,
        format!("Searching for {target} in array"),
        0,
    )];
    for (i, &value) in array.iter().enumerate() {
        let relation = if value == target { "==" } else { "!=" };
        steps.push(
            Step::array(
                array,
                format!("Checking position {i}: {value} {relation} {target}"),
                2,
            )
            .highlighting(vec![i]),
        );
        if value == target {
            steps.push(
                Step::array(array, format!("Found {target} at position {i}!"), 3)
                    .highlighting(vec![i])
                    .found(i),
            );
            return steps;
        }
    }
    steps.push(Step::array(array, format!("{target} not found in array"), 4));
    steps
}

pub(crate) fn binary_search(numbers: &[i64]) -> Vec<Step> {
    let Some((&target, haystack)) = numbers.split_last() else {
        return vec![Step::array(&[], "No search target provided", -1)];
    };
    let mut array = haystack.to_vec();
    array.sort_unstable();
    let mut steps = vec![Step::array(
        &array,
        format!("Binary searching for {target} in sorted array"),
        0,
    )];
    let mut left: i64 = 0;
    let mut right: i64 = array.len() as i64 - 1;
    while left <= right {
        let mid = (left + right) / 2;
        let mid_ix = mid as usize;
        steps.push(
            Step::array(
                &array,
                format!("Checking middle position {mid}: {}", array[mid_ix]),
                3,
            )
            .highlighting(vec![mid_ix])
            .search_range(left, right),
        );
        if array[mid_ix] == target {
            steps.push(
                Step::array(&array, format!("Found {target} at position {mid}!"), 4)
                    .highlighting(vec![mid_ix])
                    .found(mid_ix),
            );
            return steps;
        } else if array[mid_ix] < target {
            left = mid + 1;
            steps.push(
                Step::array(
                    &array,
                    format!("{target} > {}, search right half", array[mid_ix]),
                    5,
                )
                .search_range(left, right),
            );
        } else {
            right = mid - 1;
            steps.push(
                Step::array(
                    &array,
                    format!("{target} < {}, search left half", array[mid_ix]),
                    6,
                )
                .search_range(left, right),
            );
        }
    }
    steps.push(Step::array(&array, format!("{target} not found in array"), 7));
    steps
}

pub(crate) fn jump_search(numbers: &[i64]) -> Vec<Step> {
    let Some((&target, haystack)) = numbers.split_last() else {
        return vec![Step::array(&[], "No search target provided", -1)];
    };
    let mut array = haystack.to_vec();
    array.sort_unstable();
    let n = array.len();
    let jump = (n as f64).sqrt().floor() as usize;
    let mut steps = vec![Step::array(
        &array,
        format!("Jump searching for {target} with step size {jump}"),
        0,
    )];
    if n == 0 {
        steps.push(Step::array(&array, format!("{target} not found"), -1));
        return steps;
    }
    let mut prev = 0;
    let mut bound = jump;
    while array[bound.min(n) - 1] < target {
        steps.push(
            Step::array(&array, format!("Jumping to position {}", bound.min(n) - 1), 2)
                .highlighting(vec![bound.min(n) - 1]),
        );
        prev = bound;
        bound += jump;
        if prev >= n {
            break;
        }
    }
    for i in prev..bound.min(n) {
        steps.push(
            Step::array(&array, format!("Linear search at position {i}: {}", array[i]), 5)
                .highlighting(vec![i]),
        );
        if array[i] == target {
            steps.push(
                Step::array(&array, format!("Found {target} at position {i}!"), 5)
                    .highlighting(vec![i])
                    .found(i),
            );
            return steps;
        }
    }
    steps.push(Step::array(&array, format!("{target} not found"), -1));
    steps
}
