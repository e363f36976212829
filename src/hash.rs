//! Hash table simulations over a fixed table of 7 chained buckets.
//!
//! The hash function is `value mod 7` (Euclidean, so negative values still
//! land in `0..7`). Every operation emits a compute-hash step followed by an
//! apply-to-bucket step.

use crate::step::Step;

const BUCKETS: usize = 7;

fn bucket(value: i64) -> usize {
    value.rem_euclid(BUCKETS as i64) as usize
}

fn empty_table() -> Vec<Vec<i64>> {
    vec![Vec::new(); BUCKETS]
}

pub(crate) fn insert(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![
            Step::hash_table(&empty_table(), "No values to insert", -1).operation("hash-insert"),
        ];
    }
    let mut table = empty_table();
    let mut steps = Vec::new();
    for &value in numbers {
        let hash = bucket(value);
        steps.push(
            Step::hash_table(&table, format!("Hashing {value}: {value} % 7 = {hash}"), 1)
                .highlighting(vec![hash])
                .operation("hash-insert"),
        );
        table[hash].push(value);
        steps.push(
            Step::hash_table(&table, format!("Inserted {value} at bucket {hash}"), 3)
                .highlighting(vec![hash])
                .operation("hash-insert"),
        );
    }
    steps
}

pub(crate) fn search(numbers: &[i64]) -> Vec<Step> {
    let Some((&target, values)) = numbers.split_last() else {
        return vec![
            Step::hash_table(&empty_table(), "No search target provided", -1)
                .operation("hash-search"),
        ];
    };
    let mut table = empty_table();
    for &value in values {
        table[bucket(value)].push(value);
    }
    let hash = bucket(target);
    let mut steps = vec![
        Step::hash_table(
            &table,
            format!("Searching for {target}: hash = {target} % 7 = {hash}"),
            1,
        )
        .highlighting(vec![hash])
        .operation("hash-search"),
    ];
    if table[hash].contains(&target) {
        steps.push(
            Step::hash_table(&table, format!("Found {target} in bucket {hash}"), 3)
                .highlighting(vec![hash])
                .found(hash)
                .operation("hash-search"),
        );
    } else {
        steps.push(
            Step::hash_table(&table, format!("{target} not found"), 3).operation("hash-search"),
        );
    }
    steps
}

pub(crate) fn delete(numbers: &[i64]) -> Vec<Step> {
    if numbers.is_empty() {
        return vec![
            Step::hash_table(&empty_table(), "Hash table is empty, nothing to delete", -1)
                .operation("hash-delete"),
        ];
    }
    let target = numbers[numbers.len() / 2];
    let mut table = empty_table();
    for &value in numbers {
        table[bucket(value)].push(value);
    }
    let hash = bucket(target);
    let mut steps = vec![
        Step::hash_table(&table, format!("Deleting {target}: hash = {hash}"), 1)
            .highlighting(vec![hash])
            .operation("hash-delete"),
    ];
    table[hash].retain(|&v| v != target);
    steps.push(
        Step::hash_table(&table, format!("Deleted {target} from bucket {hash}"), 3)
            .highlighting(vec![hash])
            .operation("hash-delete"),
    );
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Payload;
    use rstest::rstest;

    fn table_of(step: &Step) -> &Vec<Vec<i64>> {
        match &step.payload {
            Payload::HashTable(t) => t,
            other => panic!("expected hash table payload, got {other:?}"),
        }
    }

    #[test]
    fn insert_distributes_by_value_mod_seven() {
        let steps = insert(&[15, 11, 27, 8, 12]);
        assert!(steps.iter().all(|s| table_of(s).len() == 7));
        let last = table_of(steps.last().expect("non-empty"));
        assert_eq!(last[1], vec![15, 8]);
        assert_eq!(last[4], vec![11]);
        assert_eq!(last[6], vec![27]);
        assert_eq!(last[5], vec![12]);
        assert_eq!(steps[0].explanation, "Hashing 15: 15 % 7 = 1");
    }

    #[test]
    fn negative_values_stay_in_range() {
        let steps = insert(&[-3]);
        let last = table_of(steps.last().expect("non-empty"));
        assert_eq!(last[4], vec![-3]);
    }

    #[test]
    fn search_finds_target_in_its_bucket() {
        let steps = search(&[15, 11, 8, 8]);
        let hit = steps.last().expect("non-empty");
        assert_eq!(hit.found, Some(1));
        assert_eq!(hit.explanation, "Found 8 in bucket 1");
    }

    #[test]
    fn search_misses_when_bucket_lacks_target() {
        // 22 hashes to bucket 1 alongside 15, but is not stored
        let steps = search(&[15, 11, 22]);
        assert!(steps.iter().all(|s| s.found.is_none()));
        assert_eq!(steps.last().expect("non-empty").explanation, "22 not found");
    }

    #[test]
    fn delete_filters_only_the_target_value() {
        let steps = delete(&[15, 8, 22]);
        // middle value 8 shares bucket 1 with 15 and 22
        let before = table_of(&steps[0]);
        assert_eq!(before[1], vec![15, 8, 22]);
        let after = table_of(&steps[1]);
        assert_eq!(after[1], vec![15, 22]);
    }

    #[rstest]
    #[case(insert as fn(&[i64]) -> Vec<Step>)]
    #[case(search as fn(&[i64]) -> Vec<Step>)]
    #[case(delete as fn(&[i64]) -> Vec<Step>)]
    fn every_step_has_seven_buckets(#[case] generate: fn(&[i64]) -> Vec<Step>) {
        for input in [&[][..], &[6][..], &[15, 11, 27, 8, 12][..]] {
            for step in generate(input) {
                assert_eq!(table_of(&step).len(), 7);
            }
        }
    }
}
