//! Normalized inventory model
//!
//! Point-in-time snapshot of tagged resources grouped by category. This is
//! the JSON surface of `cloudman status`, so field names are part of the
//! CLI contract.

use serde::{Deserialize, Serialize};

/// Resources found for one environment, grouped by category.
///
/// Constructed fresh per query; nothing is cached between invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceInventory {
    pub ec2_instances: Vec<Ec2Instance>,
    pub s3_buckets: Vec<S3Bucket>,
    pub vpc_ids: Vec<String>,
}

/// One EC2 instance carrying the environment and ownership tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec2Instance {
    pub id: String,
    pub state: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    /// Value of the Name tag; "N/A" when the tag is absent.
    pub name: String,
}

/// One S3 bucket whose Environment tag matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
    /// Creation timestamp, ISO-8601.
    pub created: String,
}
