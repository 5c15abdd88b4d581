//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `InventoryRepository`
//! using `aws-sdk-dynamodb`. Items live in a single table keyed by `item_id`
//! (partition key, string) and `location_id` (sort key, number).

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
