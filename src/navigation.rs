// src/navigation.rs
use crate::models::ExpressionId;
use reqwest::Url;

/// Page that shows a single expression.
pub const DETAIL_PAGE: &str = "/expression.html";

/// Query parameter carrying the expression id.
pub const ID_PARAM: &str = "id";

// Only used to resolve relative locations; never contacted.
const LOCAL_ORIGIN: &str = "http://calcwatch.local/";

/// Link to the detail page of `id`, with the id query-encoded.
pub fn detail_href(id: &ExpressionId) -> String {
    let mut url = match Url::parse(LOCAL_ORIGIN).and_then(|base| base.join(DETAIL_PAGE)) {
        Ok(url) => url,
        Err(_) => return format!("{}?{}={}", DETAIL_PAGE, ID_PARAM, id),
    };
    url.query_pairs_mut().append_pair(ID_PARAM, id.as_str());
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Reads the expression id from a page location. Accepts absolute URLs,
/// absolute paths and bare query strings. Returns `None` when the parameter
/// is missing or empty.
pub fn id_from_location(location: &str) -> Option<ExpressionId> {
    let base = Url::parse(LOCAL_ORIGIN).ok()?;
    let url = if location.starts_with('?') {
        base.join(&format!("{}{}", DETAIL_PAGE, location)).ok()?
    } else {
        base.join(location).ok()?
    };

    url.query_pairs()
        .find(|(key, _)| key == ID_PARAM)
        .and_then(|(_, value)| ExpressionId::new(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_for_plain_id() {
        let id = ExpressionId::new("1").unwrap();
        assert_eq!(detail_href(&id), "/expression.html?id=1");
    }

    #[test]
    fn href_encodes_reserved_characters() {
        let id = ExpressionId::new("a&b c").unwrap();
        let href = detail_href(&id);
        assert_eq!(href, "/expression.html?id=a%26b+c");
        assert_eq!(id_from_location(&href), Some(id));
    }

    #[test]
    fn reads_id_from_each_location_form() {
        let expected = ExpressionId::new("5f0c").unwrap();
        for location in [
            "/expression.html?id=5f0c",
            "?id=5f0c",
            "http://localhost:3000/expression.html?theme=dark&id=5f0c",
        ] {
            assert_eq!(id_from_location(location).as_ref(), Some(&expected), "{location}");
        }
    }

    #[test]
    fn missing_or_empty_id() {
        assert_eq!(id_from_location("/expression.html"), None);
        assert_eq!(id_from_location("/expression.html?id="), None);
        assert_eq!(id_from_location("/expression.html?other=1"), None);
    }
}
