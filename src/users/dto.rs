use serde::Deserialize;

/// Body of `PUT /:id`. An omitted (or `null`) field keeps its stored value;
/// a present one is written as given, even when empty.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_and_null_fields_are_none() {
        let body: UpdateUserRequest = serde_json::from_str(r#"{"password": null}"#).unwrap();
        assert_eq!(body.email, None);
        assert_eq!(body.password, None);
    }

    #[test]
    fn empty_string_is_supplied() {
        let body: UpdateUserRequest =
            serde_json::from_str(r#"{"email": "b@x.com", "password": ""}"#).unwrap();
        assert_eq!(body.email.as_deref(), Some("b@x.com"));
        assert_eq!(body.password.as_deref(), Some(""));
    }
}
