//! Free-text filtering of user lists.

use crate::types::User;

/// Filter `users` by a case-insensitive substring match against name,
/// email or username.
///
/// An empty query returns the whole list. Order is preserved.
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    if query.is_empty() {
        return users.to_vec();
    }

    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| user.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Result count label, e.g. "1 user" or "3 users".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 user".to_string()
    } else {
        format!("{} users", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreateUserData, UserId};

    fn user(id: i64, name: &str, username: &str, email: &str) -> User {
        User::from_submission(
            UserId::new(id),
            CreateUserData {
                name: name.to_string(),
                username: username.to_string(),
                email: email.to_string(),
                phone: "555".to_string(),
                website: "https://example.com".to_string(),
            },
        )
    }

    fn users() -> Vec<User> {
        vec![
            user(1, "Ann Lee", "annie", "ann@alpha.io"),
            user(2, "Bob Stone", "bstone", "bob@beta.io"),
            user(3, "Cara Mendez", "cmz", "cara@ALPHA.io"),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let all = users();
        assert_eq!(filter_users(&all, ""), all);
    }

    #[test]
    fn matching_is_case_insensitive_across_fields() {
        let all = users();
        let ids = |q: &str| -> Vec<i64> {
            filter_users(&all, q).iter().map(|u| u.id.get()).collect()
        };

        assert_eq!(ids("ALPHA"), vec![1, 3]);
        assert_eq!(ids("stone"), vec![2]);
        assert_eq!(ids("CMZ"), vec![3]);
        assert!(ids("zeta").is_empty());
    }

    #[test]
    fn every_result_matches_and_every_other_does_not() {
        let all = users();
        let query = "an";
        let found = filter_users(&all, query);

        for u in &all {
            let hit = u.name.to_lowercase().contains(query)
                || u.email.to_lowercase().contains(query)
                || u.username.to_lowercase().contains(query);
            assert_eq!(found.contains(u), hit, "user {}", u.id);
        }
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 users");
        assert_eq!(count_label(1), "1 user");
        assert_eq!(count_label(2), "2 users");
    }
}
