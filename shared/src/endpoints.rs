//! ==============================================================================
//! endpoints.rs - backend routes
//! ==============================================================================
//!
//! api:
//!     GET    /activities
//!     POST   /activities/{name}/signup?email={email}
//!     DELETE /activities/{name}/unregister?email={email}
//!
//! path and query values are percent-encoded with the same unreserved set
//! as the browser's encodeURIComponent.
//!
//! ==============================================================================

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

/// one call the widget makes against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListActivities,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListActivities => Method::Get,
            Endpoint::Signup { .. } => Method::Post,
            Endpoint::Unregister { .. } => Method::Delete,
        }
    }

    /// path plus query string, already encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListActivities => "/activities".to_string(),
            Endpoint::Signup { activity, email } => format!(
                "/activities/{}/signup?email={}",
                encode_component(activity),
                encode_component(email)
            ),
            Endpoint::Unregister { activity, email } => format!(
                "/activities/{}/unregister?email={}",
                encode_component(activity),
                encode_component(email)
            ),
        }
    }

    /// absolute url against `base` (empty base means same origin)
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// percent-encodes everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path() {
        assert_eq!(Endpoint::ListActivities.path(), "/activities");
        assert_eq!(Endpoint::ListActivities.method(), Method::Get);
    }

    #[test]
    fn test_signup_path_encodes_name_and_email() {
        let endpoint = Endpoint::Signup {
            activity: "Chess Club".into(),
            email: "a+b@x.com".into(),
        };
        assert_eq!(endpoint.method(), Method::Post);
        assert_eq!(
            endpoint.path(),
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_unregister_path() {
        let endpoint = Endpoint::Unregister {
            activity: "Art/Design".into(),
            email: "a@x.com".into(),
        };
        assert_eq!(endpoint.method(), Method::Delete);
        assert_eq!(
            endpoint.path(),
            "/activities/Art%2FDesign/unregister?email=a%40x.com"
        );
    }

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_component("a-z_0.9!~*'()"), "a-z_0.9!~*'()");
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode_component("Fútbol"), "F%C3%BAtbol");
        assert_eq!(encode_component("a&b=c?#"), "a%26b%3Dc%3F%23");
    }

    #[test]
    fn test_url_joins_base() {
        let endpoint = Endpoint::ListActivities;
        assert_eq!(endpoint.url(""), "/activities");
        assert_eq!(
            endpoint.url("http://localhost:8000/"),
            "http://localhost:8000/activities"
        );
    }
}
