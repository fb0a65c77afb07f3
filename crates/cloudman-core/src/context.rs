//! Per-invocation configuration passed into every command handler.

use std::fmt;

/// Default AWS region when AWS_REGION is not set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Logical deployment target (dev/staging/prod).
///
/// Selects both the Terraform working directory and the Environment tag
/// used for inventory queries. Fixed for the lifetime of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment(String);

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self("dev".to_string())
    }
}

impl From<String> for Environment {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Resolved invocation context.
///
/// Built once in main and handed to each handler, so command code never
/// reaches into the process environment itself.
#[derive(Debug, Clone)]
pub struct Context {
    pub environment: Environment,
    pub aws_region: String,
}

impl Context {
    pub fn new(environment: Environment) -> Self {
        let aws_region =
            std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        Self {
            environment,
            aws_region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_default() {
        assert_eq!(Environment::default().as_str(), "dev");
    }

    #[test]
    fn test_environment_display() {
        let env = Environment::new("staging");
        assert_eq!(format!("{}", env), "staging");
    }

    #[test]
    fn test_context_region_default() {
        temp_env::with_var_unset("AWS_REGION", || {
            let ctx = Context::new(Environment::default());
            assert_eq!(ctx.aws_region, "us-east-1");
        });
    }

    #[test]
    fn test_context_region_from_env() {
        temp_env::with_var("AWS_REGION", Some("eu-west-1"), || {
            let ctx = Context::new(Environment::new("prod"));
            assert_eq!(ctx.aws_region, "eu-west-1");
            assert_eq!(ctx.environment.as_str(), "prod");
        });
    }
}
