use crate::constants::value;
use crate::error::VaryError;
use crate::util::is_http_token;

/// Appends comma-separated `fields` to a `Vary` value, skipping fields
/// already listed. A `*` on either side collapses the result to `*`.
pub fn append(header: &str, fields: &str) -> Result<String, VaryError> {
    let fields: Vec<&str> = parse(fields).collect();
    if let Some(invalid) = fields.iter().find(|field| !is_http_token(field)) {
        return Err(VaryError::InvalidFieldName((*invalid).to_string()));
    }

    Ok(merge_fields(header, &fields))
}

pub(crate) fn merge(header: &str, field: &str) -> String {
    merge_fields(header, &[field])
}

fn merge_fields(header: &str, fields: &[&str]) -> String {
    if header == value::WILDCARD {
        return header.to_string();
    }

    let mut listed: Vec<String> = parse(header).map(str::to_ascii_lowercase).collect();
    if fields.contains(&value::WILDCARD) || listed.iter().any(|entry| entry == value::WILDCARD) {
        return value::WILDCARD.to_string();
    }

    let mut merged = header.to_string();
    for field in fields {
        let folded = field.to_ascii_lowercase();
        if listed.contains(&folded) {
            continue;
        }
        listed.push(folded);
        if merged.is_empty() {
            merged.push_str(field);
        } else {
            merged.push_str(", ");
            merged.push_str(field);
        }
    }
    merged
}

fn parse(header: &str) -> impl Iterator<Item = &str> {
    header
        .split(',')
        .map(|entry| entry.trim_matches(' '))
        .filter(|entry| !entry.is_empty())
}

#[cfg(test)]
#[path = "vary_test.rs"]
mod vary_test;
