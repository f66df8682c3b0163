use crate::model::{CollectionSnapshot, EmployeeRecord};

/// Number of names returned by the top earners ranking.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Records whose name contains `fragment`, ignoring case, in snapshot order.
///
/// Records without a name never match. An empty fragment matches every
/// named record.
pub fn search_by_name(snapshot: &CollectionSnapshot, fragment: &str) -> Vec<EmployeeRecord> {
    let needle = fragment.to_lowercase();
    snapshot
        .records()
        .iter()
        .filter(|record| {
            record
                .name()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Largest present salary, or `0` when no record carries one.
///
/// `0` is ambiguous: it is returned both for an empty snapshot and for a
/// snapshot whose top salary really is zero.
pub fn highest_salary(snapshot: &CollectionSnapshot) -> u64 {
    snapshot
        .records()
        .iter()
        .filter_map(|record| record.employee_salary)
        .max()
        .unwrap_or(0)
}

/// Names of the best-paid records, highest salary first, at most `limit`.
///
/// Records without a salary are skipped. Equal salaries keep their snapshot
/// order. A record with a salary but no name contributes an empty string so
/// the ranking length always equals the number of salaried records considered.
pub fn top_earner_names(snapshot: &CollectionSnapshot, limit: usize) -> Vec<String> {
    let mut salaried: Vec<(u64, &EmployeeRecord)> = snapshot
        .records()
        .iter()
        .filter_map(|record| record.employee_salary.map(|salary| (salary, record)))
        .collect();

    // sort_by is stable
    salaried.sort_by(|(a, _), (b, _)| b.cmp(a));

    salaried
        .into_iter()
        .take(limit)
        .map(|(_, record)| record.name().unwrap_or_default().to_string())
        .collect()
}

/// First record with exactly this id.
pub fn find_by_id<'a>(snapshot: &'a CollectionSnapshot, id: &str) -> Option<&'a EmployeeRecord> {
    snapshot.records().iter().find(|record| record.id == id)
}
