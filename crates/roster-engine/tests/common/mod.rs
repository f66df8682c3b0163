use roster_core::EmployeeRecord;
use roster_upstream::in_memory::InMemoryUpstream;

/// The two-employee snapshot used throughout the scenarios
#[allow(dead_code)]
pub fn nick_and_jane() -> InMemoryUpstream {
    InMemoryUpstream::with_records(vec![
        EmployeeRecord::new("1").with_name("Nick").with_salary(50000),
        EmployeeRecord::new("2").with_name("Jane").with_salary(60000),
    ])
}

/// Fifteen salaried employees, `E0`..`E14`, salary `i * 1000`
#[allow(dead_code)]
pub fn fifteen_employees() -> InMemoryUpstream {
    InMemoryUpstream::with_records(
        (0..15u64)
            .map(|i| {
                EmployeeRecord::new(format!("id-{}", i))
                    .with_name(format!("E{}", i))
                    .with_salary(i * 1000)
            })
            .collect(),
    )
}
