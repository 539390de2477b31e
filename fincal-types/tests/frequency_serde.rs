use fincal_types::{Frequency, PeriodEdge, PeriodPair};

#[test]
fn frequency_serializes_as_short_code() {
    let json = serde_json::to_string(&Frequency::HalfYearly).expect("serialize frequency");
    assert_eq!(json, "\"HY\"");

    let codes: Vec<String> = Frequency::ALL
        .iter()
        .map(|f| serde_json::to_string(f).expect("serialize frequency"))
        .collect();
    assert_eq!(
        codes,
        ["\"D\"", "\"W\"", "\"M\"", "\"Q\"", "\"HY\"", "\"Y\"", "\"C\""]
    );
}

#[test]
fn frequency_deserializes_from_either_vocabulary() {
    for freq in Frequency::ALL {
        let from_code: Frequency =
            serde_json::from_str(&format!("\"{}\"", freq.as_code())).expect("code token");
        let from_name: Frequency =
            serde_json::from_str(&format!("\"{}\"", freq.as_name())).expect("name token");
        assert_eq!(from_code, freq);
        assert_eq!(from_name, freq);
    }
}

#[test]
fn frequency_rejects_unknown_tokens() {
    let err = serde_json::from_str::<Frequency>("\"fortnightly\"").unwrap_err();
    assert!(err.to_string().contains("fortnightly"));
}

#[test]
fn period_pair_roundtrip() {
    let pair = PeriodPair::new("2024-01-01", "2024-03-31");
    let json = serde_json::to_string(&pair).expect("serialize pair");
    assert_eq!(json, "{\"start\":\"2024-01-01\",\"end\":\"2024-03-31\"}");
    let back: PeriodPair = serde_json::from_str(&json).expect("deserialize pair");
    assert_eq!(back, pair);
}

#[test]
fn period_edge_uses_lowercase_tokens() {
    assert_eq!(serde_json::to_string(&PeriodEdge::Start).unwrap(), "\"start\"");
    let end: PeriodEdge = serde_json::from_str("\"end\"").expect("deserialize edge");
    assert_eq!(end, PeriodEdge::End);
}
