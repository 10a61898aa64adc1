//! City alias normalization.
//!
//! Geocoders and users spell Indian cities several ways. The table maps
//! every known spelling (lowercase) to one canonical label. Unknown cities
//! pass through unchanged.

/// Lowercase alias → canonical city label.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("bangalore", "Bengaluru"),
    ("bengaluru", "Bengaluru"),
    ("new delhi", "Delhi"),
    ("delhi", "Delhi"),
    ("mumbai", "Mumbai"),
    ("bombay", "Mumbai"),
    ("calcutta", "Kolkata"),
    ("kolkata", "Kolkata"),
    ("madras", "Chennai"),
    ("chennai", "Chennai"),
    ("pune", "Pune"),
    ("hyderabad", "Hyderabad"),
    ("ahmedabad", "Ahmedabad"),
    ("jaipur", "Jaipur"),
    ("lucknow", "Lucknow"),
    ("indore", "Indore"),
    ("patna", "Patna"),
    ("bhopal", "Bhopal"),
    ("kochi", "Kochi"),
    ("cochin", "Kochi"),
    ("surat", "Surat"),
    ("nagpur", "Nagpur"),
    ("goa", "Goa"),
    ("ranchi", "Ranchi"),
    ("guwahati", "Guwahati"),
    ("coimbatore", "Coimbatore"),
];

/// Canonical label for a known alias, or `None`.
pub fn canonical_city(city: &str) -> Option<&'static str> {
    let key = city.trim().to_lowercase();
    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Map a city name to its canonical label, or return it unchanged.
pub fn normalize_city(city: &str) -> String {
    match canonical_city(city) {
        Some(canonical) => canonical.to_string(),
        None => city.to_string(),
    }
}
