//! Configuration options for JSON to SQL conversion

/// Target table used by the CNES establishment dumps
pub const DEFAULT_TABLE_NAME: &str = "unidade_saude";

/// Default number of records per INSERT statement
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// The fixed, ordered column list of the `unidade_saude` table. Every value
/// tuple in the generated SQL follows this order, regardless of record shape.
pub const DEFAULT_COLUMNS: &[&str] = &[
    "codigo_cnes",
    "numero_cnpj_entidade",
    "nome_razao_social",
    "nome_fantasia",
    "natureza_organizacao_entidade",
    "tipo_gestao",
    "descricao_nivel_hierarquia",
    "descricao_esfera_administrativa",
    "codigo_tipo_unidade",
    "codigo_cep_estabelecimento",
    "endereco_estabelecimento",
    "numero_estabelecimento",
    "bairro_estabelecimento",
    "numero_telefone_estabelecimento",
    "latitude_estabelecimento_decimo_grau",
    "longitude_estabelecimento_decimo_grau",
    "endereco_email_estabelecimento",
    "numero_cnpj",
    "codigo_identificador_turno_atendimento",
    "descricao_turno_atendimento",
    "estabelecimento_faz_atendimento_ambulatorial_sus",
    "codigo_estabelecimento_saude",
    "codigo_uf",
    "codigo_municipio",
    "descricao_natureza_juridica_estabelecimento",
    "codigo_motivo_desabilitacao_estabelecimento",
    "estabelecimento_possui_centro_cirurgico",
    "estabelecimento_possui_centro_obstetrico",
    "estabelecimento_possui_centro_neonatal",
    "estabelecimento_possui_atendimento_hospitalar",
    "estabelecimento_possui_servico_apoio",
    "estabelecimento_possui_atendimento_ambulatorial",
    "codigo_atividade_ensino_unidade",
    "codigo_natureza_organizacao_unidade",
    "codigo_nivel_hierarquia_unidade",
    "codigo_esfera_administrativa_unidade",
    "data_atualizacao",
];

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Target table name
    pub table_name: String,
    /// Ordered column list the output always targets
    pub columns: Vec<String>,
    /// Maximum records per INSERT statement
    pub batch_size: usize,
    /// Render a terminal progress bar (cosmetic, never affects the SQL)
    pub show_progress: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            batch_size: DEFAULT_BATCH_SIZE,
            show_progress: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Replace the column list
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.table_name.trim().is_empty() {
            return Err("Table name must not be empty".to_string());
        }

        if self.columns.is_empty() {
            return Err("Column list must not be empty".to_string());
        }

        if self.columns.iter().any(|c| c.trim().is_empty()) {
            return Err("Column names must not be empty".to_string());
        }

        if self.batch_size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }

        Ok(())
    }

    /// Number of complete INSERT statements for a given record count
    pub fn batch_count(&self, record_count: usize) -> usize {
        if record_count == 0 {
            0
        } else {
            // Integer ceiling, batch_size is validated non-zero
            (record_count + self.batch_size - 1) / self.batch_size
        }
    }
}
