//! Table query description: column selection, filters and ordering.
//!
//! A [`Query`] renders to PostgREST query parameters for the REST client and
//! can be evaluated directly against JSON rows by the in-memory backend, so
//! both backends agree on filter semantics.

use std::cmp::Ordering;

use innovalex_core::types::RecordId;
use serde_json::{Map, Value};

/// A single row predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq { column: String, value: String },
    /// `column IN (values)`
    In { column: String, values: Vec<String> },
}

/// Result ordering on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// Builder for a table read or a write filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    columns: Option<String>,
    filters: Vec<Filter>,
    order: Option<Order>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on the primary key.
    pub fn by_id(id: RecordId) -> Self {
        Self::new().eq("id", id)
    }

    /// Restrict the returned columns (comma separated, PostgREST syntax).
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter::Eq {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        self.filters.push(Filter::In {
            column: column.to_string(),
            values: values.into_iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    /// Selected columns, `*` when unrestricted.
    pub fn columns(&self) -> &str {
        self.columns.as_deref().unwrap_or("*")
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    // ---- REST rendering ----

    /// Render as PostgREST query parameters.
    ///
    /// `select` is only emitted for reads; write filters pass
    /// `include_select = false`.
    pub fn to_params(&self, include_select: bool) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        if include_select {
            params.push(("select".to_string(), self.columns().to_string()));
        }
        for filter in &self.filters {
            match filter {
                Filter::Eq { column, value } => {
                    params.push((column.clone(), format!("eq.{value}")));
                }
                Filter::In { column, values } => {
                    let list = values
                        .iter()
                        .map(|v| quote_list_value(v))
                        .collect::<Vec<_>>()
                        .join(",");
                    params.push((column.clone(), format!("in.({list})")));
                }
            }
        }
        if let Some(order) = &self.order {
            let dir = if order.ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{dir}", order.column)));
        }
        params
    }

    /// Short human-readable form of the filters, used in error messages.
    pub fn describe(&self) -> String {
        let parts: Vec<String> = self
            .to_params(false)
            .into_iter()
            .filter(|(k, _)| k != "order")
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        if parts.is_empty() {
            "all rows".to_string()
        } else {
            parts.join("&")
        }
    }

    // ---- In-process evaluation ----

    /// Whether `row` satisfies every filter.
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|filter| match filter {
            Filter::Eq { column, value } => field_text(row, column).as_deref() == Some(value),
            Filter::In { column, values } => match field_text(row, column) {
                Some(text) => values.iter().any(|v| *v == text),
                None => false,
            },
        })
    }

    /// Sort rows in place according to the query's ordering, if any.
    /// The sort is stable; nulls sort last in both directions.
    pub fn sort_rows(&self, rows: &mut [Value]) {
        let Some(order) = &self.order else {
            return;
        };
        rows.sort_by(|a, b| {
            let (va, vb) = (a.get(&order.column), b.get(&order.column));
            match (is_null(va), is_null(vb)) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ord = compare_values(va.unwrap_or(&Value::Null), vb.unwrap_or(&Value::Null));
                    if order.ascending {
                        ord
                    } else {
                        ord.reverse()
                    }
                }
            }
        });
    }

    /// Keep only the selected columns of `row`.
    pub fn project(&self, row: &Value) -> Value {
        let columns = self.columns();
        if columns == "*" {
            return row.clone();
        }
        let Some(object) = row.as_object() else {
            return row.clone();
        };
        let mut projected = Map::new();
        for column in columns.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            if let Some(value) = object.get(column) {
                projected.insert(column.to_string(), value.clone());
            }
        }
        Value::Object(projected)
    }
}

fn quote_list_value(value: &str) -> String {
    if value.contains([',', '(', ')', '"', ' ']) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

fn is_null(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Text form of a row field as it would appear in a PostgREST filter.
fn field_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
