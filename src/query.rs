//! The query being augmented.
//!
//! [`QueryTarget`] is the narrow surface the augmentation steps need from a
//! query builder. [`HttpQuery`] implements it over a Sea-ORM [`Select`],
//! keeping track of the tables it has joined so join planning can re-read
//! them on every call.

use sea_orm::sea_query::{
    Alias, ColumnRef, Condition, ConditionalStatement, Expr, IntoColumnRef, Order, OrderedStatement,
};
use sea_orm::{DbBackend, EntityTrait, QuerySelect, QueryTrait, Select, Statement};

/// Operations a query builder must offer to be augmented.
pub trait QueryTarget {
    /// Tables already joined, in the order they were joined.
    fn joined_tables(&self) -> Vec<&str>;

    /// Add `INNER JOIN table ON local = foreign`.
    fn inner_join(&mut self, table: &str, local: &str, foreign: &str);

    /// AND a condition onto the WHERE clause, leaving existing predicates as
    /// they are.
    fn and_condition(&mut self, condition: Condition);

    /// Append an ORDER BY term.
    fn order_by_column(&mut self, column: &str, order: Order);
}

/// Convert `column`, `table.column` or `schema.table.column` into a quoted
/// sea-query column reference.
pub(crate) fn column_ref(column: &str) -> ColumnRef {
    let mut parts = column.splitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(schema), Some(table), Some(name)) => {
            (Alias::new(schema), Alias::new(table), Alias::new(name)).into_column_ref()
        }
        (Some(table), Some(name), None) => (Alias::new(table), Alias::new(name)).into_column_ref(),
        _ => Alias::new(column).into_column_ref(),
    }
}

/// A Sea-ORM select plus the list of tables joined onto it.
#[derive(Debug, Clone)]
pub struct HttpQuery<E>
where
    E: EntityTrait,
{
    select: Select<E>,
    joined: Vec<String>,
}

impl<E> HttpQuery<E>
where
    E: EntityTrait,
{
    pub fn new(select: Select<E>) -> Self {
        Self {
            select,
            joined: Vec::new(),
        }
    }

    /// Record tables the select already joins (for instance through
    /// `join_rel`) so they are not joined a second time.
    #[must_use]
    pub fn with_joined<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for table in tables {
            let table = table.into();
            if !self.joined.contains(&table) {
                self.joined.push(table);
            }
        }
        self
    }

    #[must_use]
    pub fn select(&self) -> &Select<E> {
        &self.select
    }

    #[must_use]
    pub fn into_select(self) -> Select<E> {
        self.select
    }

    /// Render the statement for `backend`.
    #[must_use]
    pub fn build(&self, backend: DbBackend) -> Statement {
        self.select.build(backend)
    }
}

impl<E> From<Select<E>> for HttpQuery<E>
where
    E: EntityTrait,
{
    fn from(select: Select<E>) -> Self {
        Self::new(select)
    }
}

impl<E> QueryTarget for HttpQuery<E>
where
    E: EntityTrait,
{
    fn joined_tables(&self) -> Vec<&str> {
        self.joined.iter().map(String::as_str).collect()
    }

    fn inner_join(&mut self, table: &str, local: &str, foreign: &str) {
        QuerySelect::query(&mut self.select).inner_join(
            Alias::new(table),
            Expr::col(column_ref(local)).equals(column_ref(foreign)),
        );
        self.joined.push(table.to_string());
    }

    fn and_condition(&mut self, condition: Condition) {
        QuerySelect::query(&mut self.select).cond_where(condition);
    }

    fn order_by_column(&mut self, column: &str, order: Order) {
        QuerySelect::query(&mut self.select).order_by(column_ref(column), order);
    }
}
