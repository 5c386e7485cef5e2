use super::*;

#[test]
fn join_url_strips_duplicate_slash() {
    assert_eq!(
        join_url("http://127.0.0.1:8000/", "/api/auth/login/"),
        "http://127.0.0.1:8000/api/auth/login/"
    );
    assert_eq!(
        join_url("https://api.example.org", "/api/patients/list/"),
        "https://api.example.org/api/patients/list/"
    );
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn patient_endpoint_formats_expected_path() {
    assert_eq!(patient_endpoint(12), "/api/patients/12/");
}

#[test]
fn assessment_delete_endpoint_formats_expected_path() {
    assert_eq!(
        assessment_delete_endpoint(42),
        "/api/images/assessments/42/delete/"
    );
}

#[test]
fn http_status_message_formats_status() {
    assert_eq!(http_status_message(502), "request failed with HTTP 502");
}
