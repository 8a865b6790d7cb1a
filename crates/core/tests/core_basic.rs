use sdlocal_core::version;

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}
