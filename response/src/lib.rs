use serde::Serialize;
use serde_json::{json, Value};

pub fn ok<T>(body: T) -> Value where T: Serialize {
    json!({
        "statusCode": 200,
        "body": json!(body).to_string(),
    })
}

pub fn server_error<T>(body: T) -> Value where T: Serialize {
    json!({
        "statusCode": 500,
        "body": json!(body).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serializes_the_body() {
        let response = ok(json!({ "repository_arns": ["a"] }));
        assert_eq!(response["statusCode"], 200);
        assert_eq!(response["body"], r#"{"repository_arns":["a"]}"#);
    }

    #[test]
    fn server_error_keeps_the_body_opaque() {
        let response = server_error(json!({}));
        assert_eq!(response["statusCode"], 500);
        assert_eq!(response["body"], "{}");
    }
}
