use super::*;

#[test]
fn faculty_home_is_college_scoped() {
    assert_eq!(faculty_home("pict"), "/pict/faculty");
    assert_eq!(faculty_home("/pict/"), "/pict/faculty");
}
