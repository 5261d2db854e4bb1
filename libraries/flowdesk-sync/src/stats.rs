//! Dashboard summary figures derived from the user list.

use flowdesk_core::User;
use std::collections::BTreeSet;
use url::Url;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total_users: usize,
    /// Distinct non-empty company names
    pub companies: usize,
    /// Distinct non-empty cities
    pub cities: usize,
    /// Distinct website hosts
    pub website_domains: usize,
}

impl DirectoryStats {
    pub fn from_users(users: &[User]) -> Self {
        let companies = distinct(users.iter().map(|u| u.company.name.as_str()));
        let cities = distinct(users.iter().map(|u| u.address.city.as_str()));
        let hosts: Vec<String> = users.iter().map(|u| website_host(&u.website)).collect();
        let website_domains = distinct(hosts.iter().map(String::as_str));

        Self {
            total_users: users.len(),
            companies,
            cities,
            website_domains,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Host part of a website, with or without a scheme. Empty when unparsable.
fn website_host(website: &str) -> String {
    let website = website.trim();
    if website.is_empty() {
        return String::new();
    }

    let parsed = if website.contains("://") {
        Url::parse(website)
    } else {
        Url::parse(&format!("http://{}", website))
    };

    let host = parsed
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}
