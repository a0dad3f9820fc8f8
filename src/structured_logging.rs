//! Structured logging and pipeline context

use uuid::Uuid;

/// Structured logger for mint pipeline events
///
/// All events carry the attempt's correlation id so one mint attempt can be
/// followed across stages. Private key material is never logged.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    context_id: String,
}

impl StructuredLogger {
    pub fn new(context_id: String) -> Self {
        Self { context_id }
    }

    pub fn log_preflight(&self, payer: &str, balance: u64, required: u64) {
        tracing::debug!(
            context_id = %self.context_id,
            payer = %payer,
            balance_lamports = %balance,
            required_lamports = %required,
            "Balance preflight passed"
        );
    }

    pub fn log_transaction_built(&self, mint: &str, instruction_count: u64) {
        tracing::debug!(
            context_id = %self.context_id,
            mint = %mint,
            instruction_count = %instruction_count,
            "Mint transaction built"
        );
    }

    pub fn log_wallet_signed(&self, payer: &str) {
        tracing::debug!(
            context_id = %self.context_id,
            payer = %payer,
            "Wallet signature attached"
        );
    }

    pub fn log_broadcast(&self, signature: &str) {
        tracing::info!(
            context_id = %self.context_id,
            signature = %signature,
            "Transaction submitted"
        );
    }

    pub fn log_confirmed(&self, mint: &str, signature: &str, latency_ms: u64) {
        tracing::info!(
            context_id = %self.context_id,
            mint = %mint,
            signature = %signature,
            latency_ms = %latency_ms,
            "Mint confirmed"
        );
    }

    pub fn log_mint_failure(&self, error: &str) {
        tracing::warn!(
            context_id = %self.context_id,
            error = %error,
            "Mint attempt failed"
        );
    }
}

/// Execution context for one mint attempt
#[derive(Debug, Clone)]
pub struct PipelineContext {
    /// Unique attempt ID (also the correlation ID)
    pub request_id: String,

    /// Operation name
    pub operation: String,

    /// Structured logger instance
    pub logger: StructuredLogger,
}

impl PipelineContext {
    /// Create a new pipeline context
    pub fn new(operation: &str) -> Self {
        let request_id = Uuid::new_v4().to_string();
        Self {
            request_id: request_id.clone(),
            operation: operation.to_string(),
            logger: StructuredLogger::new(request_id),
        }
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new("mint")
    }
}
