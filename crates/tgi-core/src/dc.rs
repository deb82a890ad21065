//! Data-center geography labels.
//!
//! Fixed domain knowledge: each Telegram DC id maps to the airport code,
//! city and country of the cluster serving the account.

const DC_LOCATIONS: [(i32, &str); 15] = [
    (1, "MIA, Miami, USA, US"),
    (2, "AMS, Amsterdam, Netherlands, NL"),
    (3, "MBA, Mumbai, India, IN"),
    (4, "STO, Stockholm, Sweden, SE"),
    (5, "SIN, Singapore, SG"),
    (6, "LHR, London, United Kingdom, GB"),
    (7, "FRA, Frankfurt, Germany, DE"),
    (8, "JFK, New York, USA, US"),
    (9, "HKG, Hong Kong, HK"),
    (10, "TYO, Tokyo, Japan, JP"),
    (11, "SYD, Sydney, Australia, AU"),
    (12, "GRU, São Paulo, Brazil, BR"),
    (13, "DXB, Dubai, UAE, AE"),
    (14, "CDG, Paris, France, FR"),
    (15, "ICN, Seoul, South Korea, KR"),
];

/// Label for a DC id; anything outside 1..=15 (or absent) is `"Unknown"`.
pub fn location(dc_id: Option<i32>) -> &'static str {
    let Some(id) = dc_id else {
        return "Unknown";
    };
    DC_LOCATIONS
        .iter()
        .find(|(dc, _)| *dc == id)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fifteen_ids_have_exact_labels() {
        for (id, label) in DC_LOCATIONS {
            assert_eq!(location(Some(id)), label);
        }
        assert_eq!(location(Some(1)), "MIA, Miami, USA, US");
        assert_eq!(location(Some(5)), "SIN, Singapore, SG");
        assert_eq!(location(Some(15)), "ICN, Seoul, South Korea, KR");
    }

    #[test]
    fn out_of_range_and_absent_are_unknown() {
        assert_eq!(location(Some(0)), "Unknown");
        assert_eq!(location(Some(16)), "Unknown");
        assert_eq!(location(Some(-3)), "Unknown");
        assert_eq!(location(None), "Unknown");
    }
}
