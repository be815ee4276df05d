//! Tables generated from serializable records.
//!
//! Each record is serialized to a JSON value; object keys become
//! columns (in first-seen order across all records) and values become
//! cell text. The last field list seen per record type is kept in a
//! [`FieldCache`] so an empty slice can still produce headers.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;
use tablegen_layout::Style;

use crate::Table;
use crate::builder::TableBuilder;
use crate::theme::ThemeMode;
use tablegen_types::Result;

/// Column name used when a record does not serialize to an object.
pub const SCALAR_FIELD: &str = "value";

static GLOBAL_FIELDS: Lazy<FieldCache> = Lazy::new(FieldCache::new);

/// Thread-safe per-type memo of serialized field names.
#[derive(Debug, Default)]
pub struct FieldCache {
    fields: DashMap<TypeId, Arc<[String]>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`records_to_table`].
    pub fn global() -> &'static FieldCache {
        &GLOBAL_FIELDS
    }

    pub fn get<T: 'static>(&self) -> Option<Arc<[String]>> {
        self.fields
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Replace the cached fields for `T`.
    pub fn insert<T: 'static>(&self, fields: impl Into<Arc<[String]>>) -> Arc<[String]> {
        let fields = fields.into();
        self.fields.insert(TypeId::of::<T>(), Arc::clone(&fields));
        fields
    }

    /// Cached fields for `T`, computing them with `discover` on first use.
    pub fn get_or_insert_with<T: 'static>(
        &self,
        discover: impl FnOnce() -> Vec<String>,
    ) -> Arc<[String]> {
        let entry = self
            .fields
            .entry(TypeId::of::<T>())
            .or_insert_with(|| discover().into());
        Arc::clone(entry.value())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn clear(&self) {
        self.fields.clear();
    }
}

type FieldFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;
type NameFormatter = Box<dyn Fn(&str) -> String + Send + Sync>;
type ValueFormatter = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Controls how records become a table.
pub struct GeneratorOptions {
    pub include_headers: bool,
    pub theme: ThemeMode,
    /// Replaces the theme's table style when set.
    pub custom_style: Option<Style>,
    /// Fields to place first, matched case-insensitively. Remaining
    /// fields follow in serialization order.
    pub field_order: Vec<String>,
    pub field_filter: Option<FieldFilter>,
    pub field_name_formatter: Option<NameFormatter>,
    pub value_formatter: Option<ValueFormatter>,
    /// Apply the theme's alternating style to odd body rows.
    pub alternating_rows: bool,
    pub max_width: Option<f32>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            theme: ThemeMode::Light,
            custom_style: None,
            field_order: Vec::new(),
            field_filter: None,
            field_name_formatter: None,
            value_formatter: None,
            alternating_rows: true,
            max_width: None,
        }
    }
}

impl fmt::Debug for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorOptions")
            .field("include_headers", &self.include_headers)
            .field("theme", &self.theme)
            .field("custom_style", &self.custom_style)
            .field("field_order", &self.field_order)
            .field("field_filter", &self.field_filter.is_some())
            .field("field_name_formatter", &self.field_name_formatter.is_some())
            .field("value_formatter", &self.value_formatter.is_some())
            .field("alternating_rows", &self.alternating_rows)
            .field("max_width", &self.max_width)
            .finish()
    }
}

impl GeneratorOptions {
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_headers(mut self, include: bool) -> Self {
        self.include_headers = include;
        self
    }

    pub fn with_alternating_rows(mut self, enabled: bool) -> Self {
        self.alternating_rows = enabled;
        self
    }

    pub fn with_custom_style(mut self, style: Style) -> Self {
        self.custom_style = Some(style);
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_field_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_order = order.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_field_filter(
        mut self,
        filter: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.field_filter = Some(Box::new(filter));
        self
    }

    pub fn with_field_name_formatter(
        mut self,
        formatter: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.field_name_formatter = Some(Box::new(formatter));
        self
    }

    pub fn with_value_formatter(
        mut self,
        formatter: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_formatter = Some(Box::new(formatter));
        self
    }

    /// Order then filter the discovered fields.
    fn select_fields(&self, fields: &[String]) -> Vec<String> {
        let mut remaining: Vec<&String> = fields.iter().collect();
        let mut ordered = Vec::with_capacity(fields.len());
        for wanted in &self.field_order {
            if let Some(pos) = remaining.iter().position(|f| f.eq_ignore_ascii_case(wanted)) {
                ordered.push(remaining.remove(pos).clone());
            }
        }
        ordered.extend(remaining.into_iter().cloned());
        match &self.field_filter {
            Some(keep) => ordered.into_iter().filter(|f| keep(f.as_str())).collect(),
            None => ordered,
        }
    }

    fn label(&self, field: &str) -> String {
        match &self.field_name_formatter {
            Some(format) => format(field),
            None => format_field_name(field),
        }
    }

    fn cell_text(&self, value: Option<&Value>) -> String {
        match (&self.value_formatter, value) {
            (Some(format), Some(v)) => format(v),
            (Some(format), None) => format(&Value::Null),
            (None, Some(v)) => value_text(v),
            (None, None) => String::new(),
        }
    }
}

/// Build a table with one row per record.
///
/// Columns are the union of every record's serialized fields in
/// first-seen order, so optional fields skipped by early records and
/// keys of map-like records are never lost. An empty slice yields a header-only table when the type's
/// fields are already cached or `field_order` names them, else a table
/// with no rows.
pub fn records_to_table<T: Serialize + 'static>(
    records: &[T],
    options: &GeneratorOptions,
) -> Result<Table> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let cache = FieldCache::global();
    let discovered: Arc<[String]> = match values.as_slice() {
        [] => cache
            .get::<T>()
            .unwrap_or_else(|| options.field_order.clone().into()),
        all => cache.insert::<T>(field_names(all)),
    };
    let fields = options.select_fields(&discovered);

    let theme = options.theme.theme();
    let mut builder =
        TableBuilder::new().with_style(options.custom_style.as_ref().unwrap_or(&theme.table));
    if let Some(max_width) = options.max_width {
        builder = builder.width(max_width);
    }

    if options.include_headers && !fields.is_empty() {
        let labels: Vec<String> = fields.iter().map(|f| options.label(f)).collect();
        builder = builder.header(|h| {
            h.with_style(&theme.header).row_texts(labels);
        });
    }

    if !values.is_empty() {
        builder = builder.body(|b| {
            for (index, value) in values.iter().enumerate() {
                let stripe = if options.alternating_rows && index % 2 == 1 {
                    &theme.alternating_row
                } else {
                    &theme.row
                };
                b.row(|r| {
                    if !stripe.is_empty() {
                        r.with_style(stripe);
                    }
                    r.cells(fields.iter().map(|f| options.cell_text(field_value(value, f))));
                });
            }
        });
    }

    log::debug!(
        "generated table from {} records, {} columns, theme {:?}",
        values.len(),
        fields.len(),
        options.theme
    );
    builder.build()
}

fn field_names(values: &[Value]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for value in values {
        match value {
            Value::Object(map) => {
                for key in map.keys() {
                    if !names.contains(key) {
                        names.push(key.clone());
                    }
                }
            },
            _ => {
                if !names.iter().any(|n| n == SCALAR_FIELD) {
                    names.push(SCALAR_FIELD.to_string());
                }
            },
        }
    }
    names
}

fn field_value<'v>(value: &'v Value, field: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(field),
        scalar if field == SCALAR_FIELD => Some(scalar),
        _ => None,
    }
}

/// Plain text for a JSON value: strings unquoted, null empty, nested
/// values as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Human-readable column label: `first_name` and `FirstName` both
/// become `First Name`. Runs of capitals (`ID`) stay together.
pub fn format_field_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    let mut word_start = true;
    for ch in name.chars() {
        if matches!(ch, '_' | '-' | ' ') {
            word_start = true;
            prev = None;
            continue;
        }
        if ch.is_uppercase() && prev.is_some_and(|p| !p.is_uppercase()) {
            word_start = true;
        }
        if word_start && !out.is_empty() {
            out.push(' ');
        }
        if word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        word_start = false;
        prev = Some(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tablegen_types::{Color, FontStyle};

    #[derive(Serialize)]
    struct Fruit {
        name: &'static str,
        qty: u32,
        price: f64,
        origin: Option<&'static str>,
    }

    fn fruits() -> Vec<Fruit> {
        vec![
            Fruit {
                name: "apple",
                qty: 3,
                price: 0.5,
                origin: Some("NZ"),
            },
            Fruit {
                name: "pear",
                qty: 5,
                price: 0.75,
                origin: None,
            },
            Fruit {
                name: "plum",
                qty: 1,
                price: 1.25,
                origin: Some("ES"),
            },
        ]
    }

    fn texts(row: &tablegen_layout::Row) -> Vec<&str> {
        row.cells.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn headers_and_rows_from_fields() {
        let table = records_to_table(&fruits(), &GeneratorOptions::default()).unwrap();
        let m = table.model();
        let header = m.header.as_ref().unwrap();
        assert_eq!(texts(&header.rows[0]), ["Name", "Qty", "Price", "Origin"]);
        assert_eq!(texts(&m.body.rows[0]), ["apple", "3", "0.5", "NZ"]);
        assert_eq!(texts(&m.body.rows[1]), ["pear", "5", "0.75", ""]);
        assert_eq!(m.body.rows.len(), 3);
    }

    #[test]
    fn theme_styles_applied() {
        let options = GeneratorOptions::default().with_theme(ThemeMode::Dark);
        let table = records_to_table(&fruits(), &options).unwrap();
        let m = table.model();
        let dark = ThemeMode::Dark.theme();
        assert_eq!(m.style.background, dark.table.background);
        let header_style = m.header.as_ref().unwrap().style.as_ref().unwrap();
        assert_eq!(header_style.font_style, Some(FontStyle::Bold));
        assert!(m.body.rows[0].style.is_none());
        assert_eq!(
            m.body.rows[1].style.as_ref().unwrap().background,
            Some(Color::rgb(0x25, 0x25, 0x25))
        );
    }

    #[test]
    fn alternating_rows_can_be_disabled() {
        let options = GeneratorOptions::default().with_alternating_rows(false);
        let table = records_to_table(&fruits(), &options).unwrap();
        assert!(table.model().body.rows.iter().all(|r| r.style.is_none()));
    }

    #[test]
    fn order_filter_and_formatters() {
        let options = GeneratorOptions::default()
            .with_field_order(["PRICE", "missing"])
            .with_field_filter(|f| f != "origin")
            .with_field_name_formatter(|f| f.to_uppercase())
            .with_value_formatter(|v| match v {
                Value::Null => "-".to_string(),
                other => format!("[{}]", value_text(other)),
            })
            .with_max_width(200.0);
        let table = records_to_table(&fruits(), &options).unwrap();
        let m = table.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["PRICE", "NAME", "QTY"]);
        assert_eq!(texts(&m.body.rows[0]), ["[0.5]", "[apple]", "[3]"]);
        assert_eq!(m.max_width, Some(200.0));
    }

    #[test]
    fn no_headers() {
        let options = GeneratorOptions::default().with_headers(false);
        let table = records_to_table(&fruits(), &options).unwrap();
        assert!(table.model().header.is_none());
    }

    #[test]
    fn custom_style_replaces_theme_table_style() {
        let custom = Style {
            background: Some(Color::YELLOW),
            ..Style::default()
        };
        let options = GeneratorOptions::default().with_custom_style(custom);
        let table = records_to_table(&fruits(), &options).unwrap();
        let style = &table.model().style;
        assert_eq!(style.background, Some(Color::YELLOW));
        // The rest comes from the builder's defaults, not the theme.
        assert_eq!(style.border_color, Some(Color::BLACK));
    }

    #[test]
    fn empty_input_uses_field_order_for_headers() {
        #[derive(Serialize)]
        struct Never {
            a: u8,
        }
        let none: Vec<Never> = Vec::new();
        let options = GeneratorOptions::default().with_field_order(["first_name", "age"]);
        let table = records_to_table(&none, &options).unwrap();
        let m = table.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["First Name", "Age"]);
        assert!(m.body.rows.is_empty());
    }

    #[test]
    fn empty_input_without_hints_has_no_rows() {
        #[derive(Serialize)]
        struct Unseen {
            a: u8,
        }
        let none: Vec<Unseen> = Vec::new();
        let table = records_to_table(&none, &GeneratorOptions::default()).unwrap();
        assert_eq!(table.model().row_count(), 0);
    }

    #[test]
    fn scalar_records_use_value_column() {
        let table = records_to_table(&[1, 2, 3], &GeneratorOptions::default()).unwrap();
        let m = table.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["Value"]);
        assert_eq!(texts(&m.body.rows[2]), ["3"]);
    }

    #[test]
    fn optional_field_skipped_by_first_record_is_kept() {
        #[derive(Serialize)]
        struct Contact {
            name: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'static str>,
        }
        let contacts = [
            Contact {
                name: "ann",
                email: None,
            },
            Contact {
                name: "bob",
                email: Some("bob@example.com"),
            },
        ];
        let table = records_to_table(&contacts, &GeneratorOptions::default()).unwrap();
        let m = table.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["Name", "Email"]);
        assert_eq!(texts(&m.body.rows[0]), ["ann", ""]);
        assert_eq!(texts(&m.body.rows[1]), ["bob", "bob@example.com"]);

        // A later call whose first record has the field keeps it too.
        let table = records_to_table(&contacts[1..], &GeneratorOptions::default()).unwrap();
        assert_eq!(
            texts(&table.model().header.as_ref().unwrap().rows[0]),
            ["Name", "Email"]
        );
    }

    #[test]
    fn map_records_take_keys_from_each_call() {
        let options = GeneratorOptions::default().with_alternating_rows(false);
        let first = records_to_table(&[json!({"a": 1})], &options).unwrap();
        assert_eq!(texts(&first.model().header.as_ref().unwrap().rows[0]), ["A"]);

        let second = records_to_table(&[json!({"b": 2, "c": 3}), json!({"d": 4})], &options)
            .unwrap();
        let m = second.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["B", "C", "D"]);
        assert_eq!(texts(&m.body.rows[0]), ["2", "3", ""]);
        assert_eq!(texts(&m.body.rows[1]), ["", "", "4"]);
    }

    #[test]
    fn empty_input_reuses_last_seen_fields() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }
        records_to_table(&[Point { x: 1, y: 2 }], &GeneratorOptions::default()).unwrap();
        let none: Vec<Point> = Vec::new();
        let table = records_to_table(&none, &GeneratorOptions::default()).unwrap();
        let m = table.model();
        assert_eq!(texts(&m.header.as_ref().unwrap().rows[0]), ["X", "Y"]);
        assert!(m.body.rows.is_empty());
    }

    #[test]
    fn value_text_forms() {
        assert_eq!(value_text(&Value::Null), "");
        assert_eq!(value_text(&json!("hi")), "hi");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
        assert_eq!(value_text(&json!({"k": 1})), "{\"k\":1}");
    }

    #[test]
    fn field_name_formatting() {
        assert_eq!(format_field_name("first_name"), "First Name");
        assert_eq!(format_field_name("FirstName"), "First Name");
        assert_eq!(format_field_name("userID"), "User ID");
        assert_eq!(format_field_name("ID"), "ID");
        assert_eq!(format_field_name("qty"), "Qty");
        assert_eq!(format_field_name("__private"), "Private");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn field_cache_memoizes_per_type() {
        let cache = FieldCache::new();
        let first = cache.get_or_insert_with::<Fruit>(|| vec!["a".into()]);
        let second = cache.get_or_insert_with::<Fruit>(|| vec!["b".into()]);
        assert_eq!(&*second, ["a".to_string()]);
        assert!(Arc::ptr_eq(&first, &second));
        cache.insert::<Fruit>(vec!["c".to_string()]);
        assert_eq!(&*cache.get::<Fruit>().unwrap(), ["c".to_string()]);
        cache.get_or_insert_with::<u32>(Vec::new);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get::<Fruit>().is_none());
    }

    #[test]
    fn field_cache_shared_across_threads() {
        let cache = FieldCache::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    cache.get_or_insert_with::<Fruit>(|| vec!["name".into()]);
                });
            }
        });
        assert_eq!(cache.len(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn labels_are_trimmed_words(name in "[a-zA-Z_\\-]{0,30}") {
                let label = format_field_name(&name);
                prop_assert!(!label.contains('_'));
                prop_assert!(!label.starts_with(' '));
                prop_assert!(!label.ends_with(' '));
                prop_assert!(!label.contains("  "));
            }

            #[test]
            fn labels_keep_letters(name in "[a-z_]{0,30}") {
                let label = format_field_name(&name);
                let letters: String = name.chars().filter(|c| c.is_alphabetic()).collect();
                let kept: String = label
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .collect::<String>()
                    .to_lowercase();
                prop_assert_eq!(kept, letters);
            }
        }
    }
}
