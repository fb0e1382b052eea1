//! Column-name cleaning and string coercion applied before schema inference.
//!

use polars::prelude::*;

use crate::error::SyncError;

/// Normalize column names so the destination store accepts them.
///
/// A name that parses as a bare number gets `char_default` prepended; every
/// occurrence of a character in `bad_chars` is replaced with `char_default`.
/// When two names sanitize to the same result, trailing `char_default`
/// characters are appended until the name is unique again, since a dataframe
/// cannot hold duplicate columns.
pub fn clean_column_names(
    mut df: DataFrame,
    char_default: char,
    bad_chars: &str,
) -> Result<DataFrame, SyncError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut taken = names.clone();

    for (idx, name) in names.iter().enumerate() {
        let prefixed = if name.parse::<f64>().is_ok() {
            format!("{char_default}{name}")
        } else {
            name.to_owned()
        };
        let mut cleaned: String = prefixed
            .chars()
            .map(|c| if bad_chars.contains(c) { char_default } else { c })
            .collect();

        if cleaned != *name {
            while taken
                .iter()
                .enumerate()
                .any(|(other, n)| other != idx && *n == cleaned)
            {
                cleaned.push(char_default);
            }
            log::debug!("renaming column {name} to {cleaned}");
            df.rename(name, cleaned.clone().into())?;
            taken[idx] = cleaned;
        }
    }

    Ok(df)
}

/// Cast every non-string column to its string representation. Used when the
/// destination requires uniform text columns.
pub fn columns_to_str(mut df: DataFrame) -> Result<DataFrame, SyncError> {
    let columns: Vec<(String, DataType)> = df
        .get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.dtype().clone()))
        .collect();

    for (name, dtype) in columns {
        if dtype == DataType::String {
            continue;
        }
        let cast = df.column(&name)?.cast(&DataType::String)?;
        df.with_column(cast)?;
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::{clean_column_names, columns_to_str};
    use crate::constants::{DEFAULT_BAD_CHARS, DEFAULT_CHAR};
    use crate::error::SyncError;
    use polars::prelude::*;

    #[test]
    fn test_clean_column_names_defaults() -> Result<(), SyncError> {
        let df = df!(
            "a.b" => &[1i64, 2],
            "c#d" => &[3i64, 4],
            "5" => &[5i64, 6],
        )
        .unwrap();

        let df = clean_column_names(df, DEFAULT_CHAR, DEFAULT_BAD_CHARS)?;
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["a_b", "c_d", "_5"]);
        Ok(())
    }

    #[test]
    fn test_clean_column_names_spaces_and_colons() -> Result<(), SyncError> {
        let df = df!(
            "first name" => &["a"],
            "time:stamp" => &["b"],
            "ok_name" => &["c"],
        )
        .unwrap();

        let df = clean_column_names(df, DEFAULT_CHAR, DEFAULT_BAD_CHARS)?;
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["first_name", "time_stamp", "ok_name"]);
        Ok(())
    }

    #[test]
    fn test_clean_column_names_colliding_results() -> Result<(), SyncError> {
        let df = df!(
            "a.b" => &[1i64],
            "a b" => &[2i64],
            "a_b_" => &[3i64],
        )
        .unwrap();

        let df = clean_column_names(df, DEFAULT_CHAR, DEFAULT_BAD_CHARS)?;
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        // "a b" also sanitizes to "a_b", then grows past the taken names
        assert_eq!(names, vec!["a_b", "a_b__", "a_b_"]);
        Ok(())
    }

    #[test]
    fn test_columns_to_str_casts_non_text() -> Result<(), SyncError> {
        let df = df!(
            "id" => &[1i64, 2],
            "name" => &["a", "b"],
            "score" => &[0.5f64, 1.5],
        )
        .unwrap();

        let df = columns_to_str(df)?;
        for col in df.get_columns() {
            assert_eq!(col.dtype(), &DataType::String);
        }
        assert_eq!(
            df.column("id")?.as_materialized_series().str()?.get(0),
            Some("1")
        );
        Ok(())
    }
}
