//! Standalone aggregate utilities over finite collections. These are
//! independent of the inventory [`Store`](crate::model::Store); each takes one
//! input collection and returns a fixed-shape summary.
//!
//! Functions whose aggregate is undefined on empty input (averages, extrema)
//! fail with `EmptyInput`; partitions, counts, and concatenations return
//! their natural empty values instead.
//!
//! Ordered mappings are represented as association lists (`Vec<(K, V)>`)
//! because insertion order is part of the contract.

use crate::error::{Result, StockError};

/// Sum, average, and even count of a number sequence.
///
/// `analyze_numbers(&[1, 2, 3, 4, 5, 6])` is `(21, 3.5, 3)`.
pub fn analyze_numbers(numbers: &[i64]) -> Result<(i64, f64, usize)> {
    if numbers.is_empty() {
        return Err(StockError::EmptyInput("average"));
    }
    let sum: i64 = numbers.iter().sum();
    let average = sum as f64 / numbers.len() as f64;
    let even_count = numbers.iter().filter(|n| *n % 2 == 0).count();
    Ok((sum, average, even_count))
}

/// Longest string, shortest string, and how many contain the letter `a`.
/// On length ties the first occurrence wins.
pub fn analyze_strings<S: AsRef<str>>(strings: &[S]) -> Result<(String, String, usize)> {
    let mut iter = strings.iter().map(AsRef::as_ref);
    let first = iter.next().ok_or(StockError::EmptyInput("extremum"))?;

    let mut longest = first;
    let mut shortest = first;
    for s in iter {
        if s.len() > longest.len() {
            longest = s;
        }
        if s.len() < shortest.len() {
            shortest = s;
        }
    }
    let with_a = strings
        .iter()
        .filter(|s| s.as_ref().contains('a'))
        .count();
    Ok((longest.to_string(), shortest.to_string(), with_a))
}

/// Average salary, maximum salary, and the earner of the maximum, over an
/// ordered name→salary mapping. On ties the first earner wins.
pub fn analyze_salaries<S: AsRef<str>>(employees: &[(S, i64)]) -> Result<(f64, i64, String)> {
    let mut iter = employees.iter();
    let (first_name, first_salary) = iter.next().ok_or(StockError::EmptyInput("average"))?;

    let mut top_name = first_name.as_ref();
    let mut top_salary = *first_salary;
    let mut total = *first_salary;
    for (name, salary) in iter {
        total += salary;
        if *salary > top_salary {
            top_salary = *salary;
            top_name = name.as_ref();
        }
    }
    let average = total as f64 / employees.len() as f64;
    Ok((average, top_salary, top_name.to_string()))
}

/// Split a number sequence into evens and odds, order preserved.
pub fn filter_numbers(numbers: &[i64]) -> (Vec<i64>, Vec<i64>) {
    numbers.iter().copied().partition(|n| n % 2 == 0)
}

/// Pair keys with values in order, truncating to the shorter list.
pub fn create_dict<K: Clone, V: Clone>(keys: &[K], values: &[V]) -> Vec<(K, V)> {
    keys.iter()
        .zip(values.iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Occurrence count per character, keyed in order of first occurrence.
pub fn count_characters(input: &str) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for c in input.chars() {
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, count)) => *count += 1,
            None => counts.push((c, 1)),
        }
    }
    counts
}

/// Sum of the positive arguments and sum of the negative arguments.
pub fn sum_positive_negative(numbers: &[i64]) -> (i64, i64) {
    numbers.iter().fold((0, 0), |(pos, neg), n| {
        if *n > 0 {
            (pos + n, neg)
        } else if *n < 0 {
            (pos, neg + n)
        } else {
            (pos, neg)
        }
    })
}

/// Join named values into a `"key=value"` listing, supplied order preserved.
///
/// `generate_string(&[("name", "Alice"), ("age", "30")])` is
/// `"name=Alice, age=30"`.
pub fn generate_string<S: AsRef<str>>(pairs: &[(S, S)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
