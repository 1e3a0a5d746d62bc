//! Join planning.
//!
//! The joins a configuration declares are applied at most once per query:
//! before every search or order step the query's current join list is read
//! again and only the missing tables are joined.

use crate::config::JoinOn;
use crate::query::QueryTarget;

/// One `INNER JOIN table ON local = foreign` still to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOperation<'a> {
    pub table: &'a str,
    pub local: &'a str,
    pub foreign: &'a str,
}

/// Joins from `spec` whose table is not in `existing`, in declaration order.
///
/// Membership is an exact table-name match.
pub fn plan_joins<'a, S>(existing: &[S], spec: &'a [(String, JoinOn)]) -> Vec<JoinOperation<'a>>
where
    S: AsRef<str>,
{
    spec.iter()
        .filter(|(table, _)| !existing.iter().any(|joined| joined.as_ref() == table.as_str()))
        .map(|(table, on)| JoinOperation {
            table: table.as_str(),
            local: on.local(),
            foreign: on.foreign(),
        })
        .collect()
}

/// Plan against the query's live join list and apply what is missing.
pub fn apply_joins<Q>(query: &mut Q, spec: &[(String, JoinOn)])
where
    Q: QueryTarget + ?Sized,
{
    let planned = {
        let existing = query.joined_tables();
        for (table, _) in spec {
            if existing.contains(&table.as_str()) {
                tracing::trace!(table = %table, "Join already present, skipping");
            }
        }
        plan_joins(&existing, spec)
    };

    for join in planned {
        tracing::trace!(
            table = join.table,
            local = join.local,
            foreign = join.foreign,
            "Applying inner join"
        );
        query.inner_join(join.table, join.local, join.foreign);
    }
}
