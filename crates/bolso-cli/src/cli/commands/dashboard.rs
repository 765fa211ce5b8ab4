//! Dashboard command handler.

use anyhow::Result;
use bolso_core::auth::AuthController;
use bolso_core::messages;
use bolso_core::money::format_brl;

pub async fn run(controller: &AuthController, period: Option<&str>) -> Result<()> {
    let snapshot = match controller.client().dashboard(period).await {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => anyhow::bail!("{}", messages::DASHBOARD_FAILED),
        Err(err) => return Err(err.context(messages::CONNECTION_ERROR)),
    };

    println!("Período: {}", snapshot.period);
    println!("Saldo:   {}", format_brl(&snapshot.summary.balance));
    println!("Receita: {}", format_brl(&snapshot.summary.income));
    println!("Gastos:  {}", format_brl(&snapshot.summary.expense));
    if let Some(top) = &snapshot.top_category {
        println!("Top categoria: {top}");
    }
    if let Some(insight) = &snapshot.insight {
        println!("Insight: {insight}");
    }

    println!();
    if snapshot.transactions.is_empty() {
        println!("Nenhuma transação no período.");
    } else {
        for txn in &snapshot.transactions {
            println!(
                "{} {:>12}  {}  {}  [{}]",
                txn.kind.sign(),
                format_brl(&txn.amount),
                txn.date,
                txn.description,
                txn.category
            );
        }
    }

    Ok(())
}
