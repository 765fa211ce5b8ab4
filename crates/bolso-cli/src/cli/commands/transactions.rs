//! Transaction command handlers.

use anyhow::Result;
use bolso_core::auth::AuthController;
use bolso_core::messages;
use bolso_core::types::{TransactionDraft, TransactionType};

pub async fn add(
    controller: &AuthController,
    kind: TransactionType,
    amount: &str,
    description: &str,
    date: &str,
) -> Result<()> {
    let draft = TransactionDraft {
        kind,
        amount: amount.to_string(),
        description: description.to_string(),
        date: date.to_string(),
    };
    if let Err(message) = draft.validate() {
        anyhow::bail!("{message}");
    }

    match controller.client().create_transaction(&draft).await {
        Ok(true) => {
            println!("{}", messages::TXN_SAVED);
            Ok(())
        }
        Ok(false) => anyhow::bail!("{}", messages::TXN_SAVE_FAILED),
        Err(err) => Err(err.context(messages::CONNECTION_ERROR)),
    }
}
