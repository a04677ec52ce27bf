/*!
 * Validation engine for STJ documents.
 *
 * Checks the rules a structural schema cannot express:
 * - Time value format and range (`time_values`)
 * - Zero-duration flag consistency (`zero_duration`)
 * - Language code vocabulary (`languages`)
 * - Segment ordering and all-or-nothing timing (`segments`)
 * - Word ordering, containment and text reconciliation (`words`)
 * - Speaker/style reference integrity (`references`)
 *
 * # Architecture
 *
 * - `schema`: JSON-Schema collaborator behind the `SchemaValidator` trait
 * - `service`: Orchestrates all validators, first failure wins
 */

pub mod confidence;
pub mod languages;
pub mod references;
pub mod schema;
pub mod segments;
pub mod service;
pub mod time_values;
pub mod words;
pub mod zero_duration;

// Re-export main types
pub use schema::{JsonSchemaValidator, SchemaValidator};
pub use service::{ValidationConfig, ValidationService};
pub use words::WordTimingMode;
