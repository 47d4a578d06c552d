use crate::api::response::{DryRunTransactionBlockResponse, TransactionBlockResponse};
use crate::error::{SuiError, SuiResult};
use crate::transaction::{SignedTransaction, TransactionData, TransactionSigner, sign_transaction};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Structs that implement this trait can execute signed transactions on a
/// network. The SDK ships no transport; a JSON-RPC client, a gas station,
/// or a test double all plug in here.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    /// Executes a signed transaction and waits for its effects.
    async fn execute(&self, transaction: &SignedTransaction) -> SuiResult<TransactionBlockResponse>;

    /// Simulates unsigned transaction data without committing it.
    async fn dry_run(&self, data: &TransactionData) -> SuiResult<DryRunTransactionBlockResponse>;
}

/// Signs `data` with `signer`, executes it, and checks the status.
///
/// # Errors
///
/// Returns [`SuiError::Signing`] if signing fails, whatever the executor
/// returns on transport failure, or [`SuiError::ExecutionFailed`] if the
/// transaction aborted on chain.
pub async fn sign_and_execute<E, S>(
    executor: &E,
    signer: &S,
    data: &TransactionData,
) -> SuiResult<TransactionBlockResponse>
where
    E: TransactionExecutor + ?Sized,
    S: TransactionSigner + ?Sized,
{
    let signed = sign_transaction(data, signer)?;
    let digest = data.digest()?;

    debug!(txn_digest = %digest, "Submitting transaction to chain");
    let response = executor.execute(&signed).await?;

    if let Some(error) = response.status_error() {
        warn!(txn_digest = %digest, error, "Transaction aborted");
        return Err(SuiError::ExecutionFailed {
            status: error.to_string(),
        });
    }

    info!(txn_digest = %response.digest, "Transaction executed successfully");
    Ok(response)
}

/// Simulates `data` and fails if the simulation aborts.
///
/// # Errors
///
/// Returns whatever the executor returns on transport failure, or
/// [`SuiError::ExecutionFailed`] if the simulation aborted.
pub async fn dry_run_checked<E>(
    executor: &E,
    data: &TransactionData,
) -> SuiResult<DryRunTransactionBlockResponse>
where
    E: TransactionExecutor + ?Sized,
{
    let response = executor.dry_run(data).await?;
    if let Some(error) = response.status_error() {
        return Err(SuiError::ExecutionFailed {
            status: error.to_string(),
        });
    }
    debug!(
        net_gas = response.gas_cost_summary().net_gas_usage(),
        "Dry run succeeded"
    );
    Ok(response)
}
