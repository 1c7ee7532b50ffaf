use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CalwheelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CalwheelError::import("x").to_string().contains("import error:"));
    assert!(CalwheelError::export("x").to_string().contains("export error:"));
    assert!(
        CalwheelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CalwheelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: CalwheelError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CalwheelError::Serde(_)));
}
