use std::time::{SystemTime, UNIX_EPOCH};

pub fn utc_ns_now() -> u64 {
    let d = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    d.as_secs() * 1_000_000_000 + d.subsec_nanos() as u64
}

pub fn format_utc_ns(utc_ns: u64) -> String {
    let seconds = utc_ns / 1_000_000_000;
    let nanos = utc_ns % 1_000_000_000;
    format!("{}.{:09}", seconds, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_ns_monotonic_enough() {
        let a = utc_ns_now();
        let b = utc_ns_now();
        assert!(b >= a);
    }

    #[test]
    fn test_format_utc_ns() {
        assert_eq!(format_utc_ns(1_500_000_000), "1.500000000");
        assert_eq!(format_utc_ns(42), "0.000000042");
    }
}
