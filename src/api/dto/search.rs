//! Query parameters of the finder endpoints and the finder index.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use utoipa::{IntoParams, ToSchema};

use crate::domain::entities::Currency;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleParams {
    /// Exact, case-sensitive title.
    pub title: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeywordParams {
    /// Case-sensitive substring of the title.
    pub keyword: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PublishedDateParams {
    /// ISO-8601 date; matching books are published strictly after it.
    #[param(example = "2016-06-01")]
    pub published_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct KeywordPublishedDateParams {
    pub keyword: String,
    #[param(example = "2016-06-01")]
    pub published_date: NaiveDate,
}

/// Price range finder parameters; `low` and `high` are both inclusive.
#[serde_as]
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceRangeParams {
    pub keyword: String,
    #[param(value_type = String, example = "USD")]
    pub currency: Currency,
    #[serde_as(as = "DisplayFromStr")]
    #[param(value_type = String, example = "40.00")]
    pub low: Decimal,
    #[serde_as(as = "DisplayFromStr")]
    #[param(value_type = String, example = "50.00")]
    pub high: Decimal,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct LastNameParams {
    /// Exact, case-sensitive last name.
    pub last_name: String,
}

/// One entry of `GET /books/search` or `GET /authors/search`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinderLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinderLinksResponse {
    pub items: Vec<FinderLink>,
}

impl FinderLinksResponse {
    /// Builds the index for the finders mounted under `base`.
    pub fn new(base: &str, finders: &[(&str, &str)]) -> Self {
        Self {
            items: finders
                .iter()
                .map(|(name, params)| FinderLink {
                    name: (*name).to_string(),
                    href: format!("{base}/search/{name}{{?{params}}}"),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_params_parse_from_query_string() {
        let params: PriceRangeParams =
            parse_query("keyword=Spring&currency=USD&low=40&high=45.83");

        assert_eq!(params.currency, Currency::Usd);
        assert_eq!(params.low, Decimal::new(40, 0));
        assert_eq!(params.high, Decimal::new(4583, 2));
    }

    #[test]
    fn test_finder_links_carry_templated_href() {
        let links = FinderLinksResponse::new("/books", &[("findByTitle", "title")]);

        assert_eq!(links.items[0].href, "/books/search/findByTitle{?title}");
    }

    fn parse_query<T: serde::de::DeserializeOwned>(query: &str) -> T {
        let uri: axum::http::Uri = format!("/?{query}").parse().unwrap();
        axum::extract::Query::<T>::try_from_uri(&uri).unwrap().0
    }
}
