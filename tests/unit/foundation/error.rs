use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SwitchlightError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SwitchlightError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SwitchlightError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        SwitchlightError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SwitchlightError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: SwitchlightError = e.into();
    assert!(matches!(err, SwitchlightError::Serde(_)));
}
