/// Rendering of raw YouTube API values into the display strings the site
/// stores and shows.

/// ISO-8601 duration ("PT1H2M3S") rendered as "1:02:03", or "M:SS" under an
/// hour. Unparseable input comes back unchanged.
pub fn render_duration(iso: &str) -> String {
    let Some(rest) = iso.strip_prefix("PT") else {
        return iso.to_string();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut number = String::new();
    for c in rest.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        let value: u64 = match number.parse() {
            Ok(v) => v,
            Err(_) => return iso.to_string(),
        };
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return iso.to_string(),
        }
        number.clear();
    }

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Counts rendered the way the site shows them: 999 stays "999", 1200 reads
/// "1.2K", 3_400_000 reads "3.4M". One decimal, trailing ".0" dropped.
pub fn compact_count(count: u64) -> String {
    fn scale(count: u64, divisor: f64, suffix: &str) -> String {
        let value = count as f64 / divisor;
        let rounded = (value * 10.0).round() / 10.0;
        if (rounded.fract()).abs() < f64::EPSILON {
            format!("{}{}", rounded as u64, suffix)
        } else {
            format!("{:.1}{}", rounded, suffix)
        }
    }

    if count >= 1_000_000_000 {
        scale(count, 1_000_000_000.0, "B")
    } else if count >= 1_000_000 {
        scale(count, 1_000_000.0, "M")
    } else if count >= 1_000 {
        scale(count, 1_000.0, "K")
    } else {
        count.to_string()
    }
}

/// RFC 3339 publish timestamp cut down to its date part.
pub fn render_published_date(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_short_duration() {
        assert_eq!(render_duration("PT3M32S"), "3:32");
        assert_eq!(render_duration("PT45S"), "0:45");
    }

    #[test]
    fn renders_hour_long_duration() {
        assert_eq!(render_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(render_duration("PT2H5S"), "2:00:05");
    }

    #[test]
    fn passes_garbage_duration_through() {
        assert_eq!(render_duration("n/a"), "n/a");
    }

    #[test]
    fn compacts_counts() {
        assert_eq!(compact_count(999), "999");
        assert_eq!(compact_count(1_200), "1.2K");
        assert_eq!(compact_count(3_000), "3K");
        assert_eq!(compact_count(3_400_000), "3.4M");
        assert_eq!(compact_count(1_000_000_000), "1B");
    }

    #[test]
    fn trims_timestamp_to_date() {
        assert_eq!(render_published_date("2009-10-25T06:57:33Z"), "2009-10-25");
        assert_eq!(render_published_date("2009-10-25"), "2009-10-25");
    }
}
