//! Login, registration and logout handlers.

use anyhow::Result;
use bolso_core::auth::AuthController;

pub async fn login(controller: &AuthController, email: &str, password: &str) -> Result<()> {
    if let Some(message) = controller.sign_in(email, password).await {
        anyhow::bail!("{message}");
    }
    println!("Login efetuado. Sessão salva.");
    Ok(())
}

pub async fn register(
    controller: &AuthController,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    if let Some(message) = controller.sign_up(name, email, password).await {
        anyhow::bail!("{message}");
    }
    println!("Conta criada. Sessão salva.");
    Ok(())
}

pub async fn logout(controller: &AuthController) -> Result<()> {
    // Best-effort on the server side; local state is always cleared.
    controller.sign_out().await;
    println!("Sessão encerrada.");
    Ok(())
}
