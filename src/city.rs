pub(crate) const CITIES: [&str; 16] = [
  "Delhi",
  "Mumbai",
  "Bengaluru",
  "Chennai",
  "Kolkata",
  "Hyderabad",
  "Pune",
  "Ahmedabad",
  "Jaipur",
  "Lucknow",
  "Indore",
  "Bhopal",
  "Nagpur",
  "Surat",
  "Kanpur",
  "Patna",
];

/// Move the cursor down one entry, wrapping past the end. `None` steps onto
/// the first entry.
pub(crate) fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
  if len == 0 {
    return None;
  }

  Some(current.map_or(0, |index| (index + 1) % len))
}

/// Move the cursor up one entry, wrapping past the start. `None` steps onto
/// the last entry.
pub(crate) fn previous_index(
  current: Option<usize>,
  len: usize,
) -> Option<usize> {
  if len == 0 {
    return None;
  }

  Some(match current {
    Some(0) | None => len - 1,
    Some(index) => index.min(len - 1) - 1,
  })
}

/// Cities starting with `query`, ignoring case, in declaration order.
pub(crate) fn suggestions(query: &str) -> Vec<&'static str> {
  if query.is_empty() {
    return Vec::new();
  }

  let query = query.to_lowercase();

  CITIES
    .iter()
    .copied()
    .filter(|city| city.to_lowercase().starts_with(&query))
    .collect()
}
