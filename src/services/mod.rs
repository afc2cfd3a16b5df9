pub mod budget_service;
pub mod city_match_service;
pub mod itinerary_service;
pub mod search_service;
pub mod submission_service;
pub mod text;
