//! Core ParamHaus functionality
//!
//! This module contains the main ParamHaus struct, tying a connection pool
//! to the argument resolver and the binding configuration used for calls.

use argument_system::{Argument, ArgumentResolver, BindingConfig};
use call_system::{OutParameters, execute_call};
use config::{AppConfig, DatabaseConfig};
use sqlx::PgPool;
use std::time::Duration;
use type_mapping::Bindable;

use crate::errors::ParamHausError;

/// Main ParamHaus coordinator that binds values and runs calls
pub struct ParamHaus {
    pool: PgPool,
    resolver: &'static ArgumentResolver,
    binding: BindingConfig,
}

impl ParamHaus {
    /// Create new ParamHaus with database connection
    pub async fn new(config: DatabaseConfig, binding: BindingConfig) -> Result<Self, ParamHausError> {
        config.validate()?;
        binding.validate()?;
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self::with_pool(pool, binding))
    }

    /// Create new ParamHaus from a loaded application config
    pub async fn from_config(config: AppConfig) -> Result<Self, ParamHausError> {
        Self::new(config.database, config.binding).await
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool, binding: BindingConfig) -> Self {
        Self {
            pool,
            resolver: ArgumentResolver::global(),
            binding,
        }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn resolver(&self) -> &ArgumentResolver {
        self.resolver
    }

    pub fn binding(&self) -> &BindingConfig {
        &self.binding
    }

    /// Resolve `values` in order, each declared by its runtime type
    pub fn bind(&self, values: &[Option<&dyn Bindable>]) -> Result<Vec<Argument>, ParamHausError> {
        crate::trace_log!("[BIND] resolving {} values", values.len());
        Ok(self.resolver.resolve_all(values, &self.binding)?)
    }

    /// Bind `values` at $1..$n, run `sql` and collect its first row
    pub async fn call(
        &self,
        sql: &str,
        values: &[Option<&dyn Bindable>],
    ) -> Result<OutParameters, ParamHausError> {
        let arguments = self.bind(values)?;
        crate::debug_log!("[CALL] bound {} arguments", arguments.len());
        Ok(execute_call(&self.pool, sql, &arguments).await?)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), ParamHausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
