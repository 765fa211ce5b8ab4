//! User-facing status strings (pt-BR), shared by the TUI and CLI surfaces.

pub const LOGIN_FAILED: &str = "Falha no login. Verifique e-mail e senha.";
pub const REGISTER_FAILED: &str = "Não foi possível criar conta. Confira os dados.";
pub const CONNECTION_ERROR: &str = "Erro de conexão com o backend.";

pub const DASHBOARD_LOADING: &str = "Carregando dados...";
pub const DASHBOARD_UPDATED: &str = "Dashboard atualizado.";
pub const DASHBOARD_FAILED: &str = "Não foi possível carregar o dashboard.";

pub const TXN_SAVING: &str = "Salvando transação...";
pub const TXN_SAVED: &str = "Transação salva com sucesso.";
pub const TXN_SAVE_FAILED: &str = "Não foi possível salvar a transação.";
pub const TXN_MISSING_FIELDS: &str = "Preencha valor, descrição e data antes de salvar.";
pub const TXN_INVALID_VALUES: &str = "Verifique valor e data antes de salvar.";
