use cors_core::Headers;
use cors_core::constants::header;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn vary_values(headers: &Headers) -> Vec<String> {
    header_value(headers, header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
