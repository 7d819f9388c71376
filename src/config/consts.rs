// src/config/consts.rs

// Input
pub const DEFAULT_INPUT_DIR: &str = "PATENTES";
pub const DEFAULT_EXTENSION: &str = "html";
pub const DEFAULT_LABEL_PREFIX: &str = "ARQUIVO";

// Output
pub const DEFAULT_OUTPUT_FILE: &str = "PATENTES.HTML";
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";

// Page markers (INPI search result pages)
pub const TAX_ID_PATTERN: &str = r"CPF ou CNPJ do Depositante: '(\d{14})'";
pub const RESULT_COUNT_SELECTOR: &str = "div#tituloEResumoContextGlobal";
pub const RECORD_ANCHOR_SELECTOR: &str = "a.visitado";
pub const CLASSIFICATION_CLASS: &str = "alerta";

// Placeholders
pub const EMPTY_FIELD: &str = "-";
pub const NO_RESULTS: &str = "0";
pub const NO_DATE: &str = "0";
pub const NO_TAX_ID: &str = "";

// Report
pub const REPORT_TITLE: &str = "Relatório de Patentes";
pub const REPORT_HEADERS: [&str; 7] = [
    "Arquivo",
    "CNPJ",
    "Número de Resultados",
    "Número do Pedido",
    "Data do Depósito",
    "Título da Patente",
    "IPC",
];
