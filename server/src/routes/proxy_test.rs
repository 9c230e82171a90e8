use super::*;

#[test]
fn backend_target_keeps_path_and_query() {
    assert_eq!(
        backend_target(
            "http://backend:4000",
            "/api/subject/SUB1/get-all-students-of-this-subject",
            None
        ),
        "http://backend:4000/api/subject/SUB1/get-all-students-of-this-subject"
    );
    assert_eq!(
        backend_target(
            "http://backend:4000",
            "/api/faculty/F1/get-all-sem-and-subjects",
            Some("fresh=1&x=%20y")
        ),
        "http://backend:4000/api/faculty/F1/get-all-sem-and-subjects?fresh=1&x=%20y"
    );
}

#[test]
fn backend_target_drops_empty_query() {
    assert_eq!(backend_target("http://b", "/api/x", Some("")), "http://b/api/x");
}
