use crate::models::listing::{Listing, LISTING_SOURCE};
use crate::models::posting::RawPosting;

/// Map a provider posting into a [`Listing`]. Missing fields become empty strings.
pub fn to_listing(posting: RawPosting, keyword: &str, role: Option<&str>) -> Listing {
    Listing {
        title: posting.position.unwrap_or_default(),
        company: posting.company.unwrap_or_default(),
        company_logo: posting.company_logo.unwrap_or_default(),
        location: posting.location.unwrap_or_default(),
        posted_date: posting.date.unwrap_or_default(),
        posted_ago: posting.ago_time.unwrap_or_default(),
        salary: posting.salary.unwrap_or_default(),
        link: posting.job_url.unwrap_or_default(),
        source: LISTING_SOURCE.to_string(),
        search_keyword: keyword.to_string(),
        search_role: role.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_every_field() {
        let posting = RawPosting {
            position: Some("Rust Developer".into()),
            company: Some("Acme".into()),
            company_logo: Some("https://img/acme.png".into()),
            location: Some("Hyderabad".into()),
            date: Some("2024-05-01".into()),
            ago_time: Some("2 days ago".into()),
            salary: Some("120000".into()),
            job_url: Some("https://jobs/1".into()),
        };
        let listing = to_listing(posting, "rust", Some("Backend"));
        assert_eq!(listing.title, "Rust Developer");
        assert_eq!(listing.company_logo, "https://img/acme.png");
        assert_eq!(listing.posted_date, "2024-05-01");
        assert_eq!(listing.posted_ago, "2 days ago");
        assert_eq!(listing.link, "https://jobs/1");
        assert_eq!(listing.source, "external-provider");
        assert_eq!(listing.search_keyword, "rust");
        assert_eq!(listing.search_role.as_deref(), Some("Backend"));
    }

    #[test]
    fn missing_fields_serialize_as_empty_strings() {
        let listing = to_listing(RawPosting::default(), "rust", None);
        let value = serde_json::to_value(&listing).unwrap();
        for key in [
            "title",
            "company",
            "company_logo",
            "location",
            "posted_date",
            "posted_ago",
            "salary",
            "link",
        ] {
            assert_eq!(value[key], "", "field {key} should be an empty string");
        }
        assert!(value.get("search_role").is_none());
    }
}
