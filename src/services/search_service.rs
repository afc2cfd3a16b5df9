use futures::try_join;

use crate::db::query::CityQuery;
use crate::db::store::{StoreError, TravelStore};
use crate::models::city::{City, ScoredCity};
use crate::services::text::{clean_description, keywords};

const AUTOCOMPLETE_LIMIT: i64 = 10;

/// Number of (keyword, field) pairs where the lower-cased field contains the
/// keyword. Reported alongside results; it does not reorder them.
pub fn match_count(city: &City, keywords: &[String]) -> usize {
    let fields = [
        city.name.to_lowercase(),
        city.description.to_lowercase(),
        city.best_time_to_visit.to_lowercase(),
    ];
    keywords
        .iter()
        .map(|keyword| {
            fields
                .iter()
                .filter(|field| field.contains(keyword.as_str()))
                .count()
        })
        .sum()
}

/// Free-text city search.
///
/// Cities whose whole name equals the query (ignoring case) come first,
/// followed by every other city where a keyword hits the name, description
/// or best time to visit. `query` must already be trimmed and non-empty.
pub async fn search_cities(
    store: &dyn TravelStore,
    query: &str,
) -> Result<Vec<ScoredCity>, StoreError> {
    let keywords = keywords(query);
    log::debug!("search {:?} -> keywords {:?}", query, keywords);

    let exact = CityQuery::NameIs(query.to_string());
    let partial = CityQuery::Keywords {
        keywords: keywords.clone(),
        exclude_name: query.to_string(),
    };

    let (exact_matches, partial_matches) = if keywords.is_empty() {
        (store.find_cities(&exact, None).await?, Vec::new())
    } else {
        try_join!(
            store.find_cities(&exact, None),
            store.find_cities(&partial, None)
        )?
    };

    Ok(exact_matches
        .into_iter()
        .chain(partial_matches)
        .map(|mut city| {
            let match_count = match_count(&city, &keywords);
            city.description = clean_description(&city.description);
            ScoredCity { city, match_count }
        })
        .collect())
}

/// Up to ten city names starting with `prefix`, ignoring case.
pub async fn autocomplete(store: &dyn TravelStore, prefix: &str) -> Result<Vec<String>, StoreError> {
    let cities = store
        .find_cities(&CityQuery::NamePrefix(prefix.to_string()), Some(AUTOCOMPLETE_LIMIT))
        .await?;
    Ok(cities.into_iter().map(|city| city.name).collect())
}
