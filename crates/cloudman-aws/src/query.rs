//! Tag-filtered resource queries
//!
//! Two independent provider queries (EC2, S3) scoped to one environment.
//! The query boundary never raises: a failed category is logged and comes
//! back empty rather than aborting the whole inventory.

use crate::error::{InventoryError, Result};
use crate::inventory::{Ec2Instance, ResourceInventory, S3Bucket};
use aws_sdk_ec2::types::{Filter, Instance};
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_smithy_types::date_time::Format;

/// Tag value identifying resources owned by the Terraform configuration.
pub const MANAGED_BY_TAG: &str = "terraform";

/// Resource queries bound to one region and environment.
pub struct ResourceQuery {
    ec2: aws_sdk_ec2::Client,
    s3: aws_sdk_s3::Client,
    environment: String,
}

impl ResourceQuery {
    pub async fn new(region: &str, environment: impl Into<String>) -> Self {
        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        Self {
            ec2: aws_sdk_ec2::Client::new(&config),
            s3: aws_sdk_s3::Client::new(&config),
            environment: environment.into(),
        }
    }

    /// List all managed resources for the environment.
    ///
    /// Each category is queried independently; a failure degrades that
    /// category to empty instead of propagating.
    pub async fn list_resources(&self) -> ResourceInventory {
        let mut inventory = ResourceInventory::default();

        match self.list_instances().await {
            Ok(instances) => inventory.ec2_instances = instances,
            Err(e) => tracing::error!("Failed to list EC2 instances: {}", e),
        }

        match self.list_buckets().await {
            Ok(buckets) => inventory.s3_buckets = buckets,
            Err(e) => tracing::error!("Failed to list S3 buckets: {}", e),
        }

        inventory
    }

    /// EC2 instances tagged for this environment and managed by Terraform.
    async fn list_instances(&self) -> Result<Vec<Ec2Instance>> {
        let response = self
            .ec2
            .describe_instances()
            .filters(
                Filter::builder()
                    .name("tag:Environment")
                    .values(&self.environment)
                    .build(),
            )
            .filters(
                Filter::builder()
                    .name("tag:ManagedBy")
                    .values(MANAGED_BY_TAG)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| {
                InventoryError::Ec2(aws_sdk_ec2::error::DisplayErrorContext(e).to_string())
            })?;

        Ok(response
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .map(summarize_instance)
            .collect())
    }

    /// S3 buckets whose Environment tag matches.
    ///
    /// Bucket listing has no native tag filter, so membership is decided
    /// by a per-bucket tag lookup.
    async fn list_buckets(&self) -> Result<Vec<S3Bucket>> {
        let response = self.s3.list_buckets().send().await.map_err(|e| {
            InventoryError::S3(aws_sdk_s3::error::DisplayErrorContext(e).to_string())
        })?;

        let mut buckets = Vec::new();
        for bucket in response.buckets() {
            let Some(name) = bucket.name() else {
                continue;
            };

            // A bucket with no tag set at all is simply not ours.
            let Some(tags) = self.bucket_tags(name).await? else {
                continue;
            };

            if environment_matches(&tags, &self.environment) {
                let created = bucket
                    .creation_date()
                    .and_then(|d| d.fmt(Format::DateTime).ok())
                    .unwrap_or_else(|| "unknown".to_string());
                buckets.push(S3Bucket {
                    name: name.to_string(),
                    created,
                });
            }
        }

        Ok(buckets)
    }

    /// Tag set for one bucket; `None` when the bucket has no tags.
    async fn bucket_tags(&self, bucket: &str) -> Result<Option<Vec<aws_sdk_s3::types::Tag>>> {
        match self.s3.get_bucket_tagging().bucket(bucket).send().await {
            Ok(response) => Ok(Some(response.tag_set().to_vec())),
            Err(e) if e.as_service_error().is_some_and(|se| is_no_tag_set(se)) => Ok(None),
            Err(e) => Err(InventoryError::S3(
                aws_sdk_s3::error::DisplayErrorContext(e).to_string(),
            )),
        }
    }
}

/// Normalize one EC2 instance into its inventory descriptor.
fn summarize_instance(instance: &Instance) -> Ec2Instance {
    let name = instance
        .tags()
        .iter()
        .find(|t| t.key() == Some("Name"))
        .and_then(|t| t.value())
        .unwrap_or("N/A");

    Ec2Instance {
        id: instance.instance_id().unwrap_or_default().to_string(),
        state: instance
            .state()
            .and_then(|s| s.name())
            .map(|n| n.as_str())
            .unwrap_or("unknown")
            .to_string(),
        instance_type: instance
            .instance_type()
            .map(|t| t.as_str())
            .unwrap_or("unknown")
            .to_string(),
        name: name.to_string(),
    }
}

/// True when the tag set carries Environment=<environment>.
fn environment_matches(tags: &[aws_sdk_s3::types::Tag], environment: &str) -> bool {
    tags.iter()
        .any(|t| t.key() == "Environment" && t.value() == environment)
}

/// S3 reports a bucket without tags as a NoSuchTagSet service error.
fn is_no_tag_set(err: &impl ProvideErrorMetadata) -> bool {
    err.code() == Some("NoSuchTagSet")
}
