use store::User;

use crate::error::FetchError;

/// Fetch the user collection from `endpoint`.
pub async fn fetch_users(endpoint: &str) -> Result<Vec<User>, FetchError> {
    let response = reqwest::get(endpoint)
        .await
        .map_err(|source| FetchError::Request {
            url: endpoint.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: endpoint.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Request {
        url: endpoint.to_string(),
        source,
    })?;

    let users = decode_users(&body)?;
    tracing::debug!("Fetched {} users from {}", users.len(), endpoint);
    Ok(users)
}

/// Decode a JSON array of user records. Fields beyond the six the table
/// shows are ignored.
pub fn decode_users(body: &str) -> Result<Vec<User>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{DirectoryState, Toggles};

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "username": "Antonette",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net"
        }
    ]"#;

    #[test]
    fn test_decode_ignores_extra_fields() {
        let users = decode_users(SAMPLE).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].username, "Bret");
        assert_eq!(users[0].website, "hildegard.org");
        assert_eq!(users[1].name, "Ervin Howell");
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_users("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        assert!(matches!(decode_users("<html>"), Err(FetchError::Decode(_))));
        assert!(matches!(
            decode_users(r#"{"id": 1}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_users(r#"[{"id": 1, "name": "x"}]"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_request_error() {
        let err = fetch_users("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_fetched_records_through_toggles() {
        let body = r#"[
            {"id": 3, "name": "Bob", "username": "bob", "email": "b@x", "phone": "3", "website": "b.x"},
            {"id": 1, "name": "Alice", "username": "alice", "email": "a@x", "phone": "1", "website": "a.x"},
            {"id": 2, "name": "Carl", "username": "carl", "email": "c@x", "phone": "2", "website": "c.x"}
        ]"#;
        let mut state = DirectoryState::loaded(decode_users(body).unwrap());
        let ids = |state: &DirectoryState| -> Vec<i64> {
            state.displayed().iter().map(|u| u.id).collect()
        };

        assert_eq!(ids(&state), vec![3, 1, 2]);

        state.apply(Toggles::new(true, false));
        assert_eq!(ids(&state), vec![3, 1, 2]);

        state.apply(Toggles::new(false, true));
        assert_eq!(ids(&state), vec![1, 3, 2]);

        state.apply(Toggles::new(true, true));
        assert_eq!(ids(&state), vec![1, 3, 2]);

        let rows = state.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells[0].text, "1");
        assert_eq!(rows[0].cells[1].text, "Alice");
    }
}
