//! Console rendering of a geolocation record.

use std::io::Write;

use log::warn;

use crate::record::GeoRecord;

/// Notice printed when there is nothing to show.
pub const NO_DATA_NOTICE: &str = "No data to display.";

/// Writes one `Label: value` line per field, in the record's field order, or
/// the no-data notice when the record is absent or empty.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn render<W: Write>(writer: &mut W, record: Option<&GeoRecord>) -> std::io::Result<()> {
    match record {
        Some(record) if !record.is_empty() => {
            for (name, value) in record.fields() {
                writeln!(writer, "{}: {}", capitalize_label(name), value)?;
            }
        }
        _ => writeln!(writer, "{}", NO_DATA_NOTICE)?,
    }
    Ok(())
}

/// Renders the record to stdout.
///
/// A write failure (e.g. a closed pipe) is logged as a warning; the run
/// carries on to the file outputs.
pub fn print(record: Option<&GeoRecord>) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = render(&mut handle, record) {
        warn!("Failed to write record to stdout: {}", e);
    }
}

/// Capitalizes a field name for display: first character uppercased, the rest
/// lowercased (`ip` -> `Ip`, `timezone` -> `Timezone`).
fn capitalize_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_one_line_per_field() {
        let record = GeoRecord {
            ip: Some("1.2.3.4".to_string()),
            city: Some("Paris".to_string()),
            ..Default::default()
        };

        let mut out = Vec::new();
        render(&mut out, Some(&record)).expect("render should succeed");
        let text = String::from_utf8(out).expect("output should be UTF-8");
        assert_eq!(text, "Ip: 1.2.3.4\nCity: Paris\n");
    }

    #[test]
    fn test_render_none_prints_single_notice() {
        let mut out = Vec::new();
        render(&mut out, None).expect("render should succeed");
        let text = String::from_utf8(out).expect("output should be UTF-8");
        assert_eq!(text, format!("{}\n", NO_DATA_NOTICE));
    }

    #[test]
    fn test_render_empty_record_prints_single_notice() {
        let mut out = Vec::new();
        render(&mut out, Some(&GeoRecord::default())).expect("render should succeed");
        let text = String::from_utf8(out).expect("output should be UTF-8");
        assert_eq!(text, format!("{}\n", NO_DATA_NOTICE));
    }

    #[test]
    fn test_capitalize_label() {
        assert_eq!(capitalize_label("ip"), "Ip");
        assert_eq!(capitalize_label("timezone"), "Timezone");
        assert_eq!(capitalize_label("READme"), "Readme");
        assert_eq!(capitalize_label(""), "");
    }
}
