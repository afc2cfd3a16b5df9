//! City filters, expressed once and evaluated two ways: as a MongoDB filter
//! document for the driver, and directly against a [`City`] for the
//! in-memory store. Every pattern is built from `regex::escape`d input.

use bson::{doc, Document, Regex as BsonRegex};
use regex::{Regex, RegexBuilder};

use crate::models::city::City;

const NAME: &str = "City";
const DESCRIPTION: &str = "City_desc";
const BEST_TIME: &str = "Best_time_to_visit";
const MIN_DAYS: &str = "Min_no_of_days";
const MAX_DAYS: &str = "Max_no_of_days";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityQuery {
    /// Name equal to the given string, byte for byte.
    Named(String),
    /// Whole name equal to the given string, ignoring case.
    NameIs(String),
    /// Name starting with the given string, ignoring case.
    NamePrefix(String),
    /// Any keyword contained in the name, description or best time to
    /// visit, ignoring case. Cities whose whole name is `exclude_name` are
    /// left out. An empty keyword list matches nothing.
    Keywords {
        keywords: Vec<String>,
        exclude_name: String,
    },
    /// `Min_no_of_days <= min_days_at_most` and `Max_no_of_days >= max_days_at_least`.
    StayRange {
        min_days_at_most: u32,
        max_days_at_least: u32,
    },
}

fn whole_pattern(text: &str) -> String {
    format!("^{}$", regex::escape(text))
}

fn prefix_pattern(text: &str) -> String {
    format!("^{}", regex::escape(text))
}

fn any_pattern(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|")
}

fn regex_doc(pattern: &str) -> Document {
    doc! { "$regex": pattern, "$options": "i" }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Aggregation expression reading a stored stay length as a whole number of
/// days, matching `lenient::days`: numbers and numeric strings are rounded
/// up, anything else reads as 0.
fn stay_days(field: &str) -> Document {
    let path = format!("${}", field);
    let path = path.as_str();
    doc! {
        "$max": [
            0,
            {
                "$ceil": {
                    "$ifNull": [
                        {
                            "$convert": {
                                "input": {
                                    "$cond": [
                                        { "$eq": [{ "$type": path }, "string"] },
                                        { "$trim": { "input": path } },
                                        path,
                                    ]
                                },
                                "to": "double",
                                "onError": null,
                                "onNull": null,
                            }
                        },
                        0,
                    ]
                }
            },
        ]
    }
}

impl CityQuery {
    pub fn to_document(&self) -> Document {
        match self {
            CityQuery::Named(name) => doc! { NAME: name.as_str() },
            CityQuery::NameIs(name) => doc! { NAME: regex_doc(&whole_pattern(name)) },
            CityQuery::NamePrefix(prefix) => doc! { NAME: regex_doc(&prefix_pattern(prefix)) },
            CityQuery::Keywords { keywords, .. } if keywords.is_empty() => {
                doc! { "_id": { "$exists": false } }
            }
            CityQuery::Keywords {
                keywords,
                exclude_name,
            } => {
                let any = any_pattern(keywords);
                let exclude = BsonRegex {
                    pattern: whole_pattern(exclude_name),
                    options: "i".to_string(),
                };
                doc! {
                    "$and": [
                        {
                            "$or": [
                                { NAME: regex_doc(&any) },
                                { DESCRIPTION: regex_doc(&any) },
                                { BEST_TIME: regex_doc(&any) },
                            ]
                        },
                        { NAME: { "$not": exclude } },
                    ]
                }
            }
            CityQuery::StayRange {
                min_days_at_most,
                max_days_at_least,
            } => {
                let min_days = stay_days(MIN_DAYS);
                let max_days = stay_days(MAX_DAYS);
                let at_most = i64::from(*min_days_at_most);
                let at_least = i64::from(*max_days_at_least);
                doc! {
                    "$expr": {
                        "$and": [
                            { "$lte": [min_days, at_most] },
                            { "$gte": [max_days, at_least] },
                        ]
                    }
                }
            }
        }
    }

    /// Compile the query's patterns once for matching many cities in process.
    pub fn matcher(&self) -> Result<CityMatcher<'_>, regex::Error> {
        Ok(match self {
            CityQuery::Named(name) => CityMatcher::Named(name.as_str()),
            CityQuery::NameIs(name) => CityMatcher::Name(case_insensitive(&whole_pattern(name))?),
            CityQuery::NamePrefix(prefix) => {
                CityMatcher::Name(case_insensitive(&prefix_pattern(prefix))?)
            }
            CityQuery::Keywords { keywords, .. } if keywords.is_empty() => CityMatcher::Nothing,
            CityQuery::Keywords {
                keywords,
                exclude_name,
            } => CityMatcher::Keywords {
                any: case_insensitive(&any_pattern(keywords))?,
                exclude: case_insensitive(&whole_pattern(exclude_name))?,
            },
            CityQuery::StayRange {
                min_days_at_most,
                max_days_at_least,
            } => CityMatcher::StayRange {
                min_days_at_most: *min_days_at_most,
                max_days_at_least: *max_days_at_least,
            },
        })
    }
}

/// A [`CityQuery`] ready to test cities against, with the same semantics
/// as its filter document.
#[derive(Debug)]
pub enum CityMatcher<'q> {
    Named(&'q str),
    Name(Regex),
    Keywords { any: Regex, exclude: Regex },
    Nothing,
    StayRange {
        min_days_at_most: u32,
        max_days_at_least: u32,
    },
}

impl CityMatcher<'_> {
    pub fn matches(&self, city: &City) -> bool {
        match self {
            CityMatcher::Named(name) => city.name == *name,
            CityMatcher::Name(pattern) => pattern.is_match(&city.name),
            CityMatcher::Keywords { any, exclude } => {
                let hit = [
                    city.name.as_str(),
                    city.description.as_str(),
                    city.best_time_to_visit.as_str(),
                ]
                .into_iter()
                .any(|field| any.is_match(field));
                hit && !exclude.is_match(&city.name)
            }
            CityMatcher::Nothing => false,
            // min_days and max_days were read by lenient::days, as stay_days reads them
            CityMatcher::StayRange {
                min_days_at_most,
                max_days_at_least,
            } => city.min_days <= *min_days_at_most && city.max_days >= *max_days_at_least,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, description: &str, best_time: &str) -> City {
        City {
            name: name.to_string(),
            description: description.to_string(),
            best_time_to_visit: best_time.to_string(),
            ..Default::default()
        }
    }

    fn matches(query: &CityQuery, city: &City) -> bool {
        query.matcher().unwrap().matches(city)
    }

    #[test]
    fn test_name_is_ignores_case_but_not_partial() {
        let query = CityQuery::NameIs("goa".to_string());
        assert!(matches(&query, &city("Goa", "", "")));
        assert!(!matches(&query, &city("Goa Velha", "", "")));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let query = CityQuery::NameIs("a.c".to_string());
        assert!(!matches(&query, &city("abc", "", "")));
        assert!(matches(&query, &city("A.C", "", "")));

        let doc = CityQuery::NamePrefix("(".to_string()).to_document();
        assert_eq!(doc.get_document(NAME).unwrap().get_str("$regex").unwrap(), "^\\(");
        assert!(CityQuery::NamePrefix("(".to_string()).matcher().is_ok());
    }

    #[test]
    fn test_keywords_search_all_fields_and_exclude_exact() {
        let query = CityQuery::Keywords {
            keywords: vec!["beach".to_string(), "winter".to_string()],
            exclude_name: "Goa".to_string(),
        };
        let matcher = query.matcher().unwrap();
        assert!(matcher.matches(&city("Puri", "Temple town by the BEACH", "")));
        assert!(matcher.matches(&city("Jaipur", "", "Winter months")));
        assert!(!matcher.matches(&city("Goa", "beach", "winter")));
        assert!(!matcher.matches(&city("Shimla", "hills", "summer")));
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let query = CityQuery::Keywords {
            keywords: vec![],
            exclude_name: "x".to_string(),
        };
        assert!(!matches(&query, &city("Anything", "", "")));
        assert_eq!(query.to_document(), doc! { "_id": { "$exists": false } });
    }

    #[test]
    fn test_stay_range_document_reads_stored_values_leniently() {
        let query = CityQuery::StayRange {
            min_days_at_most: 3,
            max_days_at_least: 5,
        };
        let doc = query.to_document();
        let clauses = doc
            .get_document("$expr")
            .unwrap()
            .get_array("$and")
            .unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0].as_document().unwrap(),
            &doc! { "$lte": [stay_days(MIN_DAYS), 3_i64] }
        );
        assert_eq!(
            clauses[1].as_document().unwrap(),
            &doc! { "$gte": [stay_days(MAX_DAYS), 5_i64] }
        );

        let days = stay_days(MAX_DAYS);
        let ceil = days.get_array("$max").unwrap()[1].as_document().unwrap();
        let convert = ceil.get_document("$ceil").unwrap().get_array("$ifNull").unwrap()[0]
            .as_document()
            .unwrap()
            .get_document("$convert")
            .unwrap();
        assert_eq!(convert.get_str("to").unwrap(), "double");
        assert_eq!(convert.get("onError"), Some(&bson::Bson::Null));
    }

    #[test]
    fn test_stay_range_on_string_and_fractional_stays() {
        let query = CityQuery::StayRange {
            min_days_at_most: 3,
            max_days_at_least: 5,
        };
        let stored = |min: bson::Bson, max: bson::Bson| -> City {
            bson::from_document(doc! { "City": "Manali", "Min_no_of_days": min, "Max_no_of_days": max })
                .unwrap()
        };
        assert!(matches(&query, &stored("2".into(), "5".into())));
        assert!(matches(&query, &stored(2.5_f64.into(), 4.5_f64.into())));
        assert!(matches(&query, &stored(" 3 ".into(), 7_i32.into())));
        assert!(!matches(&query, &stored(2_i32.into(), "n/a".into())));
        assert!(!matches(&query, &stored(3.5_f64.into(), 9_i32.into())));
    }
}
