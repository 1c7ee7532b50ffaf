use super::*;

#[test]
fn adds_declaration_and_namespaces() {
    let out = to_standalone_svg(r#"<svg viewBox="0 0 10 10"><g/></svg>"#);
    assert_eq!(
        out,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" viewBox=\"0 0 10 10\"><g/></svg>"
    );
}

#[test]
fn is_idempotent() {
    let once = to_standalone_svg(r#"<svg viewBox="0 0 10 10"></svg>"#);
    assert_eq!(to_standalone_svg(&once), once);
}

#[test]
fn keeps_existing_namespace() {
    let out = to_standalone_svg(r#"<svg xmlns="http://www.w3.org/2000/svg"></svg>"#);
    assert_eq!(out.matches("xmlns=").count(), 1);
    assert!(out.contains("xmlns:xlink="));
}

#[test]
fn writes_file_with_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("calwheel-export-{}", std::process::id()));
    let path = dir.join("nested").join("wheel.svg");
    write_standalone_svg(&path, "<svg></svg>").unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(XML_DECLARATION));
    let _ = std::fs::remove_dir_all(&dir);
}
