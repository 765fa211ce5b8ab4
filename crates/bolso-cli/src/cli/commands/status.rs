//! Status command handler.

use anyhow::Result;
use bolso_core::auth::AuthController;

pub async fn run(controller: &AuthController) -> Result<()> {
    let signed_in = controller.signed_in();
    println!(
        "Sessão local: {}",
        if signed_in { "ativa" } else { "nenhuma" }
    );

    match controller.client().health().await {
        Ok(Some(health)) if health.is_ok() => println!("Backend: ok"),
        Ok(_) => println!("Backend: respondendo, estado desconhecido"),
        Err(_) => println!("Backend: inacessível"),
    }

    if signed_in {
        match controller.client().session().await {
            Ok(Some(info)) if info.authenticated => match info.user {
                Some(user) => println!("Servidor reconhece a sessão de {}", user.name),
                None => println!("Servidor reconhece a sessão."),
            },
            Ok(Some(_)) => println!("Servidor não reconhece mais a sessão."),
            Ok(None) | Err(_) => {}
        }
    }

    Ok(())
}
