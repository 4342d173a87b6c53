//! The `avalia init` command.

use std::path::PathBuf;

use anyhow::Result;
use avalia_store::{EvaluationStore, SqliteStore};

pub fn execute(db: PathBuf) -> Result<()> {
    let store = SqliteStore::new(&db);
    store.initialize()?;
    println!("Database ready: {}", db.display());

    std::fs::create_dir_all("forms")?;
    for (path, template) in [
        ("forms/lider.toml", LEADER_TEMPLATE),
        ("forms/liderado.toml", MEMBER_TEMPLATE),
    ] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, template)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Fill in forms/lider.toml or forms/liderado.toml");
    println!("  2. Run: avalia validate --form forms/lider.toml");
    println!("  3. Run: avalia submit --form forms/lider.toml");

    Ok(())
}

const LEADER_TEMPLATE: &str = r#"# Avaliação – Líder de Produção
kind = "lider"

[info]
nome = ""            # Nome do Líder (obrigatório)
area = ""            # Área/Setor
periodo = ""         # ex: 01/07 a 31/07/2025
avaliadores = ""

# Critérios de 1 a 5
[scores]
gestaoEquipe = 1
resultados = 1
comunicacao = 1
decisao = 1
recursos = 1
disciplina = 1
processos = 1
relatorios = 1
interacao = 1
desenvolvimento = 1

[qualit]
fortes = ""
melhorias = ""
acoes = ""

[kpi]
oee = ""
horasExtras = ""
refugos = ""
atrasoPlanejado = ""
absenteismo = ""

[freq]
reunioes = ""        # ex: Sim, diariamente
prazos = ""
priorizacao = ""
"#;

const MEMBER_TEMPLATE: &str = r#"# Avaliação – Liderados
kind = "liderado"
feedback = ""        # comentários / sugestões do colaborador

[info]
nome = ""            # Nome do Colaborador (obrigatório)
funcao = ""          # Função/Cargo
setor = ""
periodo = ""
lider = ""           # Líder Responsável

# Critérios de 1 a 5
[scores]
assiduidade = 1
disciplina = 1
comprometimento = 1
produtividade = 1
equipe = 1
comunicacao = 1
organizacao = 1
iniciativa = 1
aprendizado = 1
seguranca = 1

[qualit]
fortes = ""
melhorias = ""
evolucao = ""

[indic]
dados = ""           # produção, retrabalho, tempo, etc.
"#;
