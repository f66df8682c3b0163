use proptest::prelude::*;
use roster_core::{CollectionSnapshot, EmployeeRecord};

/// Strategy for a single record with optional name and salary.
///
/// Names are drawn from a small alphabet so substring matches are frequent,
/// and salaries from a narrow range so ties are frequent.
#[allow(dead_code)]
pub fn record_strategy() -> impl Strategy<Value = (Option<String>, Option<u64>)> {
    (
        proptest::option::weighted(0.9, "[a-cA-C ]{0,6}"),
        proptest::option::weighted(0.8, 0u64..20),
    )
}

/// Strategy for a whole snapshot with unique, positional ids.
#[allow(dead_code)]
pub fn snapshot_strategy(max_len: usize) -> impl Strategy<Value = CollectionSnapshot> {
    proptest::collection::vec(record_strategy(), 0..max_len).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, salary))| {
                let mut record = EmployeeRecord::new(format!("emp-{}", i));
                record.employee_name = name;
                record.employee_salary = salary;
                record
            })
            .collect()
    })
}
